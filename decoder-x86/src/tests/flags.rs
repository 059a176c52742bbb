use super::{decode64, test_mn};
use crate::{Decoder, Flag, FlagAccess, Mnemonic};

#[test]
fn arithmetic_flags_project_from_the_tables() {
    let instr = decode64(&[0x01, 0xc8]);
    let flags = instr.flags();
    assert_eq!(flags.get(Flag::Zf), Some(FlagAccess::Modified));
    assert_eq!(flags.get(Flag::Cf), Some(FlagAccess::Modified));
    assert_eq!(flags.get(Flag::Of), Some(FlagAccess::Modified));
    // ADD tests nothing.
    assert!(flags.tested().is_empty());
}

#[test]
fn carry_in_operations_test_the_carry() {
    let instr = decode64(&[0x11, 0xc8]);
    assert_eq!(instr.mnemonic(), Mnemonic::ADC);
    let flags = instr.flags();
    assert_eq!(flags.get(Flag::Cf), Some(FlagAccess::TestedModified));
    assert!(flags.tested().contains(Flag::Cf));
    assert!(flags.modified().contains(Flag::Cf));
    assert!(!flags.tested().contains(Flag::Zf));
}

#[test]
fn untouched_flags_are_absent() {
    let instr = decode64(&[0xfc]);
    assert_eq!(instr.mnemonic(), Mnemonic::CLD);
    let flags = instr.flags();
    assert_eq!(flags.get(Flag::Df), Some(FlagAccess::Cleared));
    assert_eq!(flags.get(Flag::Cf), None);
    assert_eq!(flags.get(Flag::Zf), None);
    assert_eq!(flags.iter().count(), 1);

    // A plain move touches no flags at all.
    let instr = decode64(&[0x89, 0xc8]);
    assert!(instr.flags().is_empty());
}

#[test]
fn condition_codes_test_their_flags() {
    // cmova tests CF and ZF.
    let instr = decode64(&[0x0f, 0x47, 0xc1]);
    let tested = instr.flags().tested();
    assert!(tested.contains(Flag::Cf));
    assert!(tested.contains(Flag::Zf));
    assert!(!tested.contains(Flag::Sf));
    assert!(instr.flags().written().is_empty());

    // jl tests SF and OF.
    let instr = decode64(&[0x7c, 0x00]);
    let tested = instr.flags().tested();
    assert!(tested.contains(Flag::Sf));
    assert!(tested.contains(Flag::Of));

    assert_eq!(instr.mnemonic().condition(), Some(crate::ConditionCode::L));
}

#[test]
fn logic_clears_carry_and_overflow() {
    let instr = decode64(&[0x31, 0xc0]);
    let flags = instr.flags();
    assert!(flags.cleared().contains(Flag::Cf));
    assert!(flags.cleared().contains(Flag::Of));
    assert!(flags.undefined().contains(Flag::Af));
    assert!(flags.modified().contains(Flag::Zf));
}

#[test]
fn x87_condition_codes_ride_the_same_summary() {
    // fcomi writes ZF/PF/CF and clears C1.
    let instr = test_mn(&Decoder::long(), &[0xdb, 0xf1], Mnemonic::FCOMI);
    let flags = instr.flags();
    assert!(flags.modified().contains(Flag::Zf));
    assert!(flags.modified().contains(Flag::Cf));
    assert!(flags.cleared().contains(Flag::C1));

    // fcom writes the condition codes, not rflags.
    let instr = test_mn(&Decoder::long(), &[0xd8, 0xd1], Mnemonic::FCOM);
    let flags = instr.flags();
    assert!(flags.modified().contains(Flag::C0));
    assert!(flags.modified().contains(Flag::C3));
    assert_eq!(flags.get(Flag::Zf), None);

    // fnstsw reads them.
    let instr = test_mn(&Decoder::long(), &[0xdf, 0xe0], Mnemonic::FNSTSW);
    assert!(instr.flags().tested().contains(Flag::C2));
}

#[test]
fn direction_flag_on_string_ops() {
    let instr = decode64(&[0xa4]);
    assert!(instr.flags().tested().contains(Flag::Df));
    assert!(instr.flags().written().is_empty());

    // cmps also produces the compare result.
    let instr = decode64(&[0xa6]);
    assert!(instr.flags().tested().contains(Flag::Df));
    assert!(instr.flags().modified().contains(Flag::Zf));
}

#[test]
fn adcx_and_adox_are_single_flag() {
    let instr = test_mn(&Decoder::long(), &[0x66, 0x0f, 0x38, 0xf6, 0xc1], Mnemonic::ADCX);
    assert_eq!(instr.flags().iter().count(), 1);
    assert_eq!(instr.flags().get(Flag::Cf), Some(FlagAccess::TestedModified));

    let instr = test_mn(&Decoder::long(), &[0xf3, 0x0f, 0x38, 0xf6, 0xc1], Mnemonic::ADOX);
    assert_eq!(instr.flags().get(Flag::Of), Some(FlagAccess::TestedModified));
    assert_eq!(instr.flags().get(Flag::Cf), None);
}

#[test]
fn flag_register_pseudo_operand() {
    let instr = decode64(&[0x9c]);
    assert_eq!(instr.mnemonic(), Mnemonic::PUSHF);
    let flags_op = instr
        .operands()
        .iter()
        .find(|op| matches!(op.kind, crate::OperandKind::Flags { .. }))
        .expect("flags operand");
    assert!(flags_op.access.may_read());
    assert!(instr.flags().tested().contains(Flag::If));
}
