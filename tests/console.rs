use handheld::{Console, Error, Instruction, Operation, State};

fn code(text: &[&str]) -> Vec<Instruction> {
    handheld::parse_code(text.iter().enumerate().map(|(i, s)| (i + 1, *s))).unwrap()
}

const SAMPLE: [&str; 9] = [
    "nop +0", "acc +1", "jmp +4", "acc +3", "jmp -3", "acc -99", "acc +1", "jmp -4", "acc +6",
];

#[test]
fn sample_loops_with_accumulator_5() {
    let _ = env_logger::builder().is_test(true).try_init();
    let code = code(&SAMPLE);

    match Console::new(&code).run() {
        Err(Error::InfiniteLoop(state)) => assert_eq!(state, State { inst_ptr: 1, acc: 5 }),
        res => panic!("Expect infinite loop, get {:?}", res),
    }
}

#[test]
fn straight_code_sums_accumulates() {
    let code = code(&["acc +3", "nop -7", "acc -1", "acc +10"]);

    let state = Console::new(&code).run().unwrap();
    assert_eq!(state, State { inst_ptr: 4, acc: 12 });
}

#[test]
fn self_jump_loops_after_one_step() {
    let code = code(&["jmp +0"]);

    assert!(matches!(
        Console::new(&code).run(),
        Err(Error::InfiniteLoop(State { inst_ptr: 0, acc: 0 }))
    ));
}

#[test]
fn jump_past_end_halts() {
    let code = code(&["acc +2", "jmp +5", "acc +100"]);

    let state = Console::new(&code).run().unwrap();
    assert_eq!(state, State { inst_ptr: 6, acc: 2 });
}

#[test]
fn jump_before_start_is_invalid() {
    let code = code(&["nop +0", "jmp -2"]);

    assert!(matches!(
        Console::new(&code).run(),
        Err(Error::InvalidJmp(1, -2))
    ));
}

#[test]
fn unknown_operation_fails_at_run_time() {
    let code = code(&["acc +1", "mul +2"]);

    match Console::new(&code).run() {
        Err(Error::InvalidInst { inst_ptr, name }) => {
            assert_eq!(inst_ptr, 1);
            assert_eq!(name, "mul");
        }
        res => panic!("Expect invalid instruction, get {:?}", res),
    }
}

#[test]
fn empty_code_halts_immediately() {
    assert_eq!(Console::new(&[]).run().unwrap(), State::new());
}

#[test]
fn fresh_consoles_give_same_result() {
    let code = vec![
        Instruction::new(Operation::Acc, 5),
        Instruction::new(Operation::Jmp, 2),
        Instruction::new(Operation::Acc, 50),
        Instruction::new(Operation::Acc, -1),
    ];

    let first = Console::new(&code).run().unwrap();
    let second = Console::new(&code).run().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, State { inst_ptr: 4, acc: 4 });
}

#[test]
fn accumulator_overflow_is_error() {
    let max_acc = format!("acc +{}", isize::MAX);
    let code = code(&[max_acc.as_str(), "acc +1"]);

    match Console::new(&code).run() {
        Err(Error::AccOverflow { inst_ptr, acc, arg }) => {
            assert_eq!(inst_ptr, 1);
            assert_eq!(acc, isize::MAX);
            assert_eq!(arg, 1);
        }
        res => panic!("Expect accumulator overflow, get {:?}", res),
    }
}
