use pulse6502_lib::memory::load_program;
use pulse6502_lib::{AddressableIO, Cpu, CpuConfiguration, Host, Memory, StatusFlag};

#[derive(Debug, Default)]
struct TestHost {
    output: String,
    interrupts: Vec<u8>,
    shutdown_requests: usize,
    diagnostics: Vec<String>,
}

impl Host for TestHost {
    fn write_output(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn interrupt_pending(&self) -> bool {
        !self.interrupts.is_empty()
    }

    fn request_shutdown(&mut self) {
        self.shutdown_requests += 1;
    }

    fn write_diagnostics(&mut self, text: &str) {
        self.diagnostics.push(text.to_owned());
    }
}

fn run(cpu: &mut Cpu, memory: &mut Memory, host: &mut TestHost, max_pulses: u64) {
    while !cpu.is_halted() && cpu.cycle_count() < max_pulses {
        cpu.pulse(memory, host);
    }
}

fn get_stuff(program: &[u8]) -> (Cpu, Memory, TestHost) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut memory = Memory::default();
    load_program(&mut memory, 0x0000, program).unwrap();

    (Cpu::default(), memory, TestHost::default())
}

#[test]
fn print_characters() {
    let (mut cpu, mut memory, mut host) = get_stuff(&[
        0xa2, 0x02, // LDX #2
        0xa0, 0x48, // LDY #'H'
        0xff, //       SYS
        0xa0, 0x49, // LDY #'I'
        0xff, //       SYS
        0x00, //       BRK
    ]);
    run(&mut cpu, &mut memory, &mut host, 100);

    assert!(cpu.is_halted());
    assert_eq!("HI", host.output);
    assert_eq!(1, host.shutdown_requests);
    // 3 × LDY/LDX (4) + 2 × SYS (4) + BRK up to its break step (2)
    assert_eq!(22, cpu.cycle_count());
    assert_eq!(22, cpu.trace().len());
}

#[test]
fn counting_loop() {
    let (mut cpu, mut memory, mut host) = get_stuff(&[
        0xea, //             NOP
        0xee, 0x40, 0x00, // INC $0040
        0xac, 0x40, 0x00, // LDY $0040
        0xa2, 0x01, //       LDX #1
        0xff, //             SYS
        0xae, 0x40, 0x00, // LDX $0040
        0xec, 0x41, 0x00, // CPX $0041
        0xd0, 0xef, //       BNE back to INC
        0x00, //             BRK
    ]);
    memory.write(0x0041, 0x03).unwrap();
    run(&mut cpu, &mut memory, &mut host, 1000);

    assert!(cpu.is_halted());
    assert_eq!("123", host.output);
    assert_eq!(0x03, memory.read(0x0040).unwrap());
    assert_eq!(0x0012, cpu.registers().program_counter);
    assert_eq!(1, host.shutdown_requests);
}

#[test]
fn store_and_add() {
    let (mut cpu, mut memory, mut host) = get_stuff(&[
        0xa9, 0x28, //       LDA #$28
        0x8d, 0x30, 0x00, // STA $0030
        0x6d, 0x30, 0x00, // ADC $0030
        0xa8, //             TAY
        0x98, //             TYA
        0x00, //             BRK
    ]);
    run(&mut cpu, &mut memory, &mut host, 100);

    assert_eq!(0x28, memory.read(0x0030).unwrap());
    assert_eq!(0x50, cpu.registers().accumulator);
    assert_eq!(0x50, cpu.registers().register_y);
    assert!(cpu.registers().b_flag_is_set());
}

#[test]
fn overflow_does_not_halt() {
    let (mut cpu, mut memory, mut host) = get_stuff(&[
        0xa9, 0xff, //       LDA #$ff
        0x6d, 0x20, 0x00, // ADC $0020
        0xea, //             NOP
    ]);
    memory.write(0x0020, 0x02).unwrap();
    for _ in 0..9 {
        cpu.pulse(&mut memory, &mut host);
    }

    assert_eq!(0x01, cpu.registers().accumulator);
    assert!(cpu.registers().flag_is_set(StatusFlag::Overflow));
    assert!(!cpu.is_halted());
    cpu.pulse(&mut memory, &mut host);
    assert_eq!(0xea, cpu.registers().instruction_register);
    assert_eq!(0, host.shutdown_requests);
}

#[test]
fn pending_interrupt_is_flagged_on_completion() {
    let (mut cpu, mut memory, mut host) = get_stuff(&[0xea, 0xea]);
    host.interrupts.push(b'k');
    cpu.pulse(&mut memory, &mut host);
    cpu.pulse(&mut memory, &mut host);
    assert_eq!(None, cpu.registers().status_register);
    cpu.pulse(&mut memory, &mut host);
    assert!(cpu.registers().flag_is_set(StatusFlag::InterruptPending));
    assert_eq!(1, host.interrupts.len());
}

#[test]
fn trace_reflects_state_after_each_pulse() {
    let (mut cpu, mut memory, mut host) = get_stuff(&[0xa9, 0x05, 0xaa, 0x00]);
    run(&mut cpu, &mut memory, &mut host, 100);

    let entries = cpu.trace().entries();
    assert_eq!(cpu.cycle_count() as usize, entries.len());
    let steps: Vec<u8> = entries.iter().map(|e| e.step).collect();
    assert_eq!(vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2], steps);
    assert_eq!(0x00, entries[1].accumulator);
    assert_eq!(0x05, entries[2].accumulator);
    assert_eq!(Some(0x05), entries[1].decoded_byte1);
    assert_eq!(0x05, entries[6].register_x);
    assert_eq!(Some(4), entries[9].status_register);
    for (n, entry) in entries.iter().enumerate() {
        assert_eq!(n as u64 + 1, entry.cycle);
    }
}

#[test]
fn diagnostics_dumped_in_debug_mode() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut memory = Memory::default();
    load_program(&mut memory, 0x0000, &[0xea, 0x00]).unwrap();
    let mut host = TestHost::default();
    let mut cpu = Cpu::new(CpuConfiguration { debug: true });
    run(&mut cpu, &mut memory, &mut host, 100);

    assert_eq!(1, host.diagnostics.len());
    let table = &host.diagnostics[0];
    assert!(table.starts_with(" Cycle |"));
    assert_eq!(cpu.trace().len() + 1, table.lines().count());
}

#[test]
fn memory_error_in_handler_is_not_fatal() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut memory = Memory::new(0x100);
    load_program(&mut memory, 0x0000, &[0xad, 0x00, 0x10, 0xea]).unwrap();
    let mut cpu = Cpu::default();
    let mut host = TestHost::default();
    // LDA $1000 reads past the end of the memory on its step 4
    for _ in 0..5 {
        cpu.pulse(&mut memory, &mut host);
    }

    assert!(!cpu.is_halted());
    assert_eq!(0, cpu.pipeline().step);
    assert_eq!(0x1000, cpu.registers().stack_pointer);
    assert_eq!(0x00, cpu.registers().accumulator);
    cpu.pulse(&mut memory, &mut host);
    assert_eq!(0xea, cpu.registers().instruction_register);
    assert_eq!(0, host.shutdown_requests);
}

#[test]
fn fetch_past_memory_end_halts() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut memory = Memory::new(4);
    load_program(&mut memory, 0x0000, &[0xea, 0xea, 0xea, 0xea]).unwrap();
    let mut cpu = Cpu::default();
    let mut host = TestHost::default();
    run(&mut cpu, &mut memory, &mut host, 100);

    assert!(cpu.is_halted());
    assert!(cpu.registers().b_flag_is_set());
    assert_eq!(1, host.shutdown_requests);
    // 4 NOP of 3 pulses, failed fetch, BRK break step
    assert_eq!(14, cpu.cycle_count());
}
