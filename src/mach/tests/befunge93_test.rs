use super::*;

const B93: Dialect = Dialect::Befunge93;

#[test]
fn test_digits_push_in_order() {
    assert_eq!(stack_of(&["123@"], B93), vec![1, 2, 3]);
}

#[test]
fn test_binary_operand_order() {
    assert_eq!(stack_of(&["26/@"], B93), vec![3]);
    assert_eq!(stack_of(&["49%@"], B93), vec![1]);
    assert_eq!(stack_of(&["23-@"], B93), vec![1]);
    assert_eq!(stack_of(&["34*@"], B93), vec![12]);
}

#[test]
fn test_divide_by_zero_pushes_zero() {
    assert_eq!(stack_of(&["05/@"], B93), vec![0]);
    assert_eq!(stack_of(&["05%@"], B93), vec![0]);
}

#[test]
fn test_greater() {
    assert_eq!(stack_of(&["52`@"], B93), vec![1]);
    assert_eq!(stack_of(&["25`@"], B93), vec![0]);
    assert_eq!(stack_of(&["55`@"], B93), vec![0]);
}

#[test]
fn test_not_on_empty_stack() {
    assert_eq!(stack_of(&["!@"], B93), vec![1]);
    assert_eq!(stack_of(&["7!@"], B93), vec![0]);
}

#[test]
fn test_stack_instructions_on_short_stacks() {
    assert_eq!(stack_of(&[":@"], B93), vec![0, 0]);
    assert_eq!(stack_of(&["\\@"], B93), vec![0]);
    assert_eq!(stack_of(&["1\\@"], B93), vec![1, 0]);
    assert_eq!(stack_of(&["12\\@"], B93), vec![2, 1]);
    assert_eq!(stack_of(&["$12$@"], B93), vec![1]);
}

#[test]
fn test_string_mode() {
    assert_eq!(stack_of(&["\"ab\"@"], B93), vec![97, 98]);
    let mut r = runtime(&["\"@ \"@"], B93);
    run(&mut r);
    assert_eq!(r.stack(), &[64, 32]);
}

#[test]
fn test_print() {
    let mut r = runtime(&["\"!iH\",,,5.@"], B93);
    assert_eq!(run(&mut r), "Hi!5 ");
}

#[test]
fn test_print_negative_number() {
    let mut r = runtime(&["50-.@"], B93);
    assert_eq!(run(&mut r), "-5 ");
}

#[test]
fn test_hello_world() {
    let mut r = runtime(&["64+\"!dlroW ,olleH\">:#,_@"], B93);
    assert_eq!(run(&mut r), "Hello, World!\n");
}

#[test]
fn test_put_one_indexed() {
    let mut r = runtime(&["67+5*11p@"], B93);
    run(&mut r);
    assert_eq!(r.space().get(&Vector::from([0, 0])), b'A');
}

#[test]
fn test_put_outside_writes_zero_at_origin() {
    let mut r = runtime(&["p@"], B93);
    run(&mut r);
    assert!(r.is_halted());
    assert_eq!(r.space().row(0), "0@");
}

#[test]
fn test_get_zero_indexed() {
    assert_eq!(stack_of(&["21g@", "  A "], B93), vec![65]);
}

#[test]
fn test_get_out_of_range_pushes_zero() {
    assert_eq!(stack_of(&["99g@"], B93), vec![0]);
}

#[test]
fn test_trampoline() {
    assert_eq!(halted_at(&["#@v", "  @"], B93), Vector::from([2, 1]));
}

#[test]
fn test_torus_wraps_west() {
    let mut r = runtime(&["<@.1"], B93);
    assert_eq!(run(&mut r), "1 ");
}

#[test]
fn test_horizontal_if() {
    let mut r = runtime(&["0_7.@"], B93);
    assert_eq!(run(&mut r), "7 ");
    let mut r = runtime(&["1_7.@"], B93);
    assert_eq!(run(&mut r), "");
    assert_eq!(r.ip().position(), &Vector::from([4, 0]));
}

#[test]
fn test_vertical_if() {
    let mut r = runtime(&["0|", " 7", " .", " @"], B93);
    assert_eq!(run(&mut r), "7 ");
    let mut r = runtime(&["1|", " 7", " @", " ."], B93);
    assert_eq!(run(&mut r), "0 ");
}

#[test]
fn test_random_is_cardinal() {
    for seed in 0..8 {
        let mut r = Runtime::from_lines(&["?1.@"], B93).unwrap().with_seed(seed);
        let output = run(&mut r);
        assert!(output == "1 " || output.is_empty(), "{:?}", output);
        assert!(r.is_halted());
    }
}

#[test]
fn test_invalid_instruction() {
    let mut r = runtime(&["1v", " Z"], B93);
    assert_eq!(
        run(&mut r),
        "Invalid instruction [ Z ] at 2 row, 2 column\n"
    );
}

#[test]
fn test_invalid_instruction_ignored_by_policy() {
    let mut r = runtime(&["Z1@"], B93).with_policy(crate::lang::UnknownPolicy::Ignore);
    run(&mut r);
    assert_eq!(r.stack(), &[1]);
}

#[test]
fn test_input_number() {
    let mut r = runtime(&["&2*.@"], B93);
    assert_eq!(run(&mut r), "");
    r.enter("21");
    assert_eq!(run(&mut r), "42 ");
}

#[test]
fn test_input_number_rejected() {
    let mut r = runtime(&["&.@"], B93);
    run(&mut r);
    r.enter("x1");
    assert_eq!(run(&mut r), "Invalid number; x1\n");
    r.enter(" -3 ");
    assert_eq!(run(&mut r), "-3 ");
}

#[test]
fn test_input_char() {
    let mut r = runtime(&["~.@"], B93);
    run(&mut r);
    r.enter("");
    assert_eq!(run(&mut r), "");
    r.enter("AB");
    assert_eq!(run(&mut r), "65 ");
}

#[test]
fn test_debug_trace() {
    let mut r = runtime(&["1@"], B93).with_debug(true);
    assert_eq!(
        run(&mut r),
        "evaluate command [ 1 ] at Y: 1 X: 1, string mode: false, stack: [  ]\n\
         evaluate command [ @ ] at Y: 1 X: 2, string mode: false, stack: [ 1 ]\n"
    );
}

#[test]
fn test_interrupt() {
    let mut r = runtime(&[">v", "^<"], B93);
    assert_eq!(run_cycles(&mut r, 10), "\n10 Execution cycles exceeded.\n");
    r.interrupt();
    assert!(run(&mut r).starts_with("Interrupted at "));
    assert!(r.is_halted());
}
