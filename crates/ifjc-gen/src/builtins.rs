//! The fixed prelude implementing the 13 `ifj.*` built-in functions.
//!
//! Every body here is grounded verbatim on the reference generator's
//! `gen_builtin_functions`: same label names, same instruction order.
//! `ifj.substring`, `ifj.ord`, and `ifj.strcmp` are the non-trivial
//! ones — they validate operand types/bounds at runtime and branch.

/// Maps a built-in's fully-qualified source name (`ifj.write`) to the
/// label its `CALL` should target.
pub fn call_label(name: &str) -> Option<&'static str> {
    Some(match name {
        "ifj.string" => "$ifj_string",
        "ifj.write" => "$ifj_write",
        "ifj.readi32" => "$ifj_readi32",
        "ifj.readstr" => "$ifj_readstr",
        "ifj.readf64" => "$ifj_readf64",
        "ifj.i2f" => "$ifj_i2f",
        "ifj.f2i" => "$ifj_f2i",
        "ifj.concat" => "$ifj_concat",
        "ifj.length" => "$ifj_length",
        "ifj.substring" => "$ifj_substring",
        "ifj.strcmp" => "$ifj_strcmp",
        "ifj.ord" => "$ifj_ord",
        "ifj.chr" => "$ifj_chr",
        _ => return None,
    })
}

/// Renders the whole built-in prelude as IFJcode24 text, appended
/// right after the header's `JUMP $main`.
pub fn prelude() -> String {
    let mut out = String::new();

    simple_unary_read(&mut out, "ifj_readstr", "string");
    simple_unary_read(&mut out, "ifj_readi32", "int");
    simple_unary_read(&mut out, "ifj_readf64", "float");

    out.push_str(
        "\nLABEL $ifj_write\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@param1\n\
         POPS LF@param1\n\
         WRITE LF@param1\n\
         POPFRAME\n\
         RETURN\n",
    );

    unary_op(&mut out, "ifj_i2f", "INT2FLOAT");
    unary_op(&mut out, "ifj_f2i", "FLOAT2INT");

    out.push_str(
        "\nLABEL $ifj_string\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@param1\n\
         POPS LF@param1\n\
         MOVE GF@return LF@param1\n\
         POPFRAME\n\
         RETURN\n",
    );

    out.push_str(
        "\nLABEL $ifj_concat\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@param1\n\
         DEFVAR LF@param2\n\
         POPS LF@param1\n\
         POPS LF@param2\n\
         CONCAT GF@return LF@param1 LF@param2\n\
         POPFRAME\n\
         RETURN\n",
    );

    unary_op(&mut out, "ifj_length", "STRLEN");
    unary_op(&mut out, "ifj_chr", "INT2CHAR");

    out.push_str(
        "\nLABEL $ifj_ord\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@param1\n\
         DEFVAR LF@param2\n\
         DEFVAR LF@length\n\
         DEFVAR LF@char\n\
         DEFVAR LF@result\n\
         DEFVAR LF@type_check\n\
         POPS LF@param1\n\
         POPS LF@param2\n\
         TYPE LF@type_check LF@param1\n\
         JUMPIFNEQ $ord_error LF@type_check string@string\n\
         STRLEN LF@length LF@param1\n\
         LT GF@temp LF@param2 int@0\n\
         JUMPIFEQ $ord_error GF@temp bool@true\n\
         LT GF@temp LF@param2 LF@length\n\
         JUMPIFEQ $ord_inbounds GF@temp bool@true\n\
         LABEL $ord_error\n\
         MOVE GF@return int@0\n\
         POPFRAME\n\
         RETURN\n\
         LABEL $ord_inbounds\n\
         STRI2INT LF@result LF@param1 LF@param2\n\
         MOVE GF@return LF@result\n\
         POPFRAME\n\
         RETURN\n",
    );

    out.push_str(
        "\nLABEL $ifj_substring\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@param1\n\
         DEFVAR LF@param2\n\
         DEFVAR LF@param3\n\
         DEFVAR LF@result\n\
         DEFVAR LF@char\n\
         DEFVAR LF@index\n\
         DEFVAR LF@end\n\
         DEFVAR LF@type_check\n\
         MOVE LF@result string@\n\
         POPS LF@param1\n\
         POPS LF@param2\n\
         POPS LF@param3\n\
         TYPE LF@type_check LF@param2\n\
         JUMPIFNEQ $substr_error LF@type_check string@int\n\
         TYPE LF@type_check LF@param3\n\
         JUMPIFNEQ $substr_error LF@type_check string@int\n\
         LT GF@temp LF@param2 int@0\n\
         JUMPIFEQ $substr_error GF@temp bool@true\n\
         LT GF@temp LF@param3 int@0\n\
         JUMPIFEQ $substr_error GF@temp bool@true\n\
         ADD LF@end LF@param2 LF@param3\n\
         MOVE LF@index LF@param2\n\
         LABEL $substr_loop\n\
         LT GF@temp LF@index LF@end\n\
         JUMPIFEQ $substr_end GF@temp bool@false\n\
         STRLEN GF@temp LF@param1\n\
         LT GF@temp LF@index GF@temp\n\
         JUMPIFEQ $substr_error GF@temp bool@false\n\
         STRI2INT LF@char LF@param1 LF@index\n\
         INT2CHAR LF@char LF@char\n\
         CONCAT LF@result LF@result LF@char\n\
         ADD LF@index LF@index int@1\n\
         JUMP $substr_loop\n\
         LABEL $substr_end\n\
         MOVE GF@return LF@result\n\
         POPFRAME\n\
         RETURN\n\
         LABEL $substr_error\n\
         MOVE GF@return nil@nil\n\
         POPFRAME\n\
         RETURN\n",
    );

    out.push_str(
        "\nLABEL $ifj_strcmp\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@result\n\
         DEFVAR LF@param1\n\
         DEFVAR LF@param2\n\
         POPS LF@param1\n\
         POPS LF@param2\n\
         GT LF@result LF@param1 LF@param2\n\
         JUMPIFEQ $strcmp_greater LF@result bool@true\n\
         LT GF@return LF@param1 LF@param2\n\
         JUMPIFEQ $strcmp_less GF@return bool@true\n\
         MOVE GF@return int@0\n\
         POPFRAME\n\
         RETURN\n\
         LABEL $strcmp_greater\n\
         MOVE GF@return int@1\n\
         POPFRAME\n\
         RETURN\n\
         LABEL $strcmp_less\n\
         MOVE GF@return int@-1\n\
         POPFRAME\n\
         RETURN\n",
    );

    out
}

fn simple_unary_read(out: &mut String, label: &str, read_type: &str) {
    out.push_str(&format!(
        "\nLABEL ${label}\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         READ GF@return {read_type}\n\
         POPFRAME\n\
         RETURN\n"
    ));
}

fn unary_op(out: &mut String, label: &str, instr: &str) {
    out.push_str(&format!(
        "\nLABEL ${label}\n\
         CREATEFRAME\n\
         PUSHFRAME\n\
         DEFVAR LF@param1\n\
         POPS LF@param1\n\
         {instr} GF@return LF@param1\n\
         POPFRAME\n\
         RETURN\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_contains_every_builtin_label() {
        let text = prelude();
        for name in [
            "$ifj_readstr",
            "$ifj_readi32",
            "$ifj_readf64",
            "$ifj_write",
            "$ifj_i2f",
            "$ifj_f2i",
            "$ifj_string",
            "$ifj_concat",
            "$ifj_length",
            "$ifj_chr",
            "$ifj_ord",
            "$ifj_substring",
            "$ifj_strcmp",
        ] {
            assert!(text.contains(&format!("LABEL {name}")), "missing {name}");
        }
    }

    #[test]
    fn call_label_maps_known_builtins_and_rejects_unknown_names() {
        assert_eq!(call_label("ifj.write"), Some("$ifj_write"));
        assert_eq!(call_label("not_a_builtin"), None);
    }
}
