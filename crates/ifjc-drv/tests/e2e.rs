//! End-to-end scenarios, run against the real `ifjc` binary with
//! source piped over stdin and generated IFJcode24 read back from
//! stdout — grounded on the teacher's `tests/e2e` layout and its
//! `assert_cmd`/`predicates` dev-dependency choice for driving the
//! binary as a subprocess rather than calling `Session` in-process.

use assert_cmd::Command;
use predicates::prelude::*;

fn ifjc() -> Command {
    Command::cargo_bin("ifjc").unwrap()
}

#[test]
fn minimal_program_exits_zero_and_emits_the_standard_skeleton() {
    ifjc()
        .write_stdin("const ifj = @import(\"ifj24.zig\");\npub fn main() void {\n}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LABEL $main"))
        .stdout(predicate::str::contains("CREATEFRAME"))
        .stdout(predicate::str::contains("PUSHFRAME"))
        .stdout(predicate::str::contains("EXIT int@0"));
}

#[test]
fn hello_world_canonicalises_the_newline_escape_and_calls_ifj_write() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    ifj.write(\"Hi\\n\");\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("PUSHS string@Hi\\010"))
        .stdout(predicate::str::contains("CALL $ifj_write"));
}

#[test]
fn nullable_unwrap_emits_the_nil_check_and_binds_a_local() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var m: ?i32 = null;\n\
    if (m) |v| {\n\
        ifj.write(v);\n\
    } else {\n\
    }\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("nil@nil"))
        .stdout(predicate::str::contains("DEFVAR LF@v"));
}

#[test]
fn assigning_an_int_variable_to_a_float_variable_is_a_type_error() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var a: i32 = 1;\n\
    var b: f64 = a;\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Error 7"));
}

#[test]
fn an_unused_local_variable_is_rejected_at_scope_exit() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var x: i32 = 1;\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .failure()
        .code(9)
        .stderr(predicate::str::contains("Error 9"));
}

#[test]
fn a_program_with_no_main_function_is_rejected() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn helper() void {\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Error 3"));
}

#[test]
fn literal_int_widens_against_a_float_literal_in_arithmetic() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var x: f64 = 1 + 1.0;\n\
    ifj.write(x);\n\
}\n";
    ifjc().write_stdin(source).assert().success();
}

#[test]
fn a_non_literal_int_variable_cannot_widen_against_a_float_literal() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var a: i32 = 1;\n\
    var x: f64 = a + 1.0;\n\
    ifj.write(x);\n\
}\n";
    ifjc().write_stdin(source).assert().failure().code(7);
}

#[test]
fn an_explicit_return_in_a_void_function_is_rejected() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn helper() void {\n\
    return 0;\n\
}\n\
pub fn main() void {\n\
    helper();\n\
}\n";
    ifjc().write_stdin(source).assert().failure().code(6);
}

#[test]
fn declaring_null_without_a_type_annotation_fails_type_inference() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var x = null;\n\
    ifj.write(x);\n\
}\n";
    ifjc().write_stdin(source).assert().failure().code(8);
}

#[test]
fn a_bare_string_type_annotation_declares_and_compiles() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var s: []u8 = \"hi\";\n\
    ifj.write(s);\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEFVAR LF@s"));
}

#[test]
fn a_nullable_string_unwrap_binds_a_local_of_type_string() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var m: ?[]u8 = null;\n\
    if (m) |v| {\n\
        ifj.write(v);\n\
    } else {\n\
    }\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("nil@nil"))
        .stdout(predicate::str::contains("DEFVAR LF@v"));
}

#[test]
fn an_or_condition_with_no_trailing_token_parses_successfully() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn main() void {\n\
    var a: i32 = 1;\n\
    var b: i32 = 2;\n\
    if (a == 1 || b == 2) {\n\
    } else {\n\
    }\n\
}\n";
    ifjc()
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("ORS"));
}

#[test]
fn calling_a_user_function_with_the_wrong_argument_type_is_rejected() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn takes_float(x: f64) void {\n\
}\n\
pub fn main() void {\n\
    takes_float(1);\n\
}\n";
    ifjc().write_stdin(source).assert().failure().code(4);
}

#[test]
fn a_nullable_parameter_does_not_accept_its_non_null_base_type() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn takes_nullable(x: ?i32) void {\n\
}\n\
pub fn main() void {\n\
    var a: i32 = 1;\n\
    takes_nullable(a);\n\
}\n";
    ifjc().write_stdin(source).assert().failure().code(4);
}

#[test]
fn a_nullable_parameter_does_not_accept_a_literal_null() {
    let source = "const ifj = @import(\"ifj24.zig\");\n\
pub fn takes_nullable(x: ?i32) void {\n\
}\n\
pub fn main() void {\n\
    takes_nullable(null);\n\
}\n";
    ifjc().write_stdin(source).assert().failure().code(4);
}
