use super::{decode32, decode64, test_invalid, test_mn};
use crate::{cpuid, Category, Decoder, IsaSet, Mnemonic, ModeSet, PrefixSet};

#[test]
fn mode_mismatch_is_advisory() {
    // syscall decodes in protected mode; it just is not valid there.
    let instr = test_mn(&Decoder::protected(), &[0x0f, 0x05], Mnemonic::SYSCALL);
    assert!(!instr.mode_supported());
    assert!(instr.valid_modes().contains(ModeSet::LONG));
    assert!(!instr.valid_modes().contains(ModeSet::PROTECTED));

    let instr = test_mn(&Decoder::long(), &[0x0f, 0x05], Mnemonic::SYSCALL);
    assert!(instr.mode_supported());

    // swapgs likewise decodes anywhere, valid only in 64-bit ring 0.
    let instr = test_mn(&Decoder::protected(), &[0x0f, 0x01, 0xf8], Mnemonic::SWAPGS);
    assert!(!instr.mode_supported());
}

#[test]
fn reclaimed_encodings_are_hard_errors_not_advisories() {
    // push es exists in legacy modes only; in 64-bit mode the byte pattern
    // itself is undefined, which is different from an advisory mismatch.
    test_mn(&Decoder::protected(), &[0x06], Mnemonic::PUSH);
    test_invalid(&Decoder::long(), &[0x06]);
    test_invalid(&Decoder::long(), &[0x27]);
    test_invalid(&Decoder::long(), &[0x60]);
    test_invalid(&Decoder::long(), &[0xce]);
}

#[test]
fn privileged_instructions_carry_ring_zero() {
    let instr = test_mn(&Decoder::long(), &[0xf4], Mnemonic::HLT);
    assert!(instr.valid_modes().contains(ModeSet::RING0));
    assert!(!instr.valid_modes().contains(ModeSet::RING3));
    // Still decodes and still reports supported: ring is not the decoder's
    // mode input.
    assert!(instr.mode_supported());
}

#[test]
fn vmx_instructions_carry_vmx_contexts() {
    let instr = test_mn(&Decoder::long(), &[0x0f, 0x01, 0xc1], Mnemonic::VMCALL);
    assert!(instr.valid_modes().contains(ModeSet::VMX_ROOT));
    assert_eq!(instr.category(), Category::Vmx);
    assert_eq!(instr.isa_set(), IsaSet::Vmx);
    let feature = instr.cpuid_feature().unwrap();
    assert_eq!(feature.leaf, 1);
    assert_eq!(feature.bit, 5);
}

#[test]
fn cpuid_feature_references() {
    let instr = test_mn(&Decoder::long(), &[0x0f, 0xc7, 0xf0], Mnemonic::RDRAND);
    let feature = instr.cpuid_feature().unwrap();
    assert_eq!(feature.leaf, 1);
    assert_eq!(feature.bit, 30);
    assert!(std::ptr::eq(feature, &cpuid::RDRAND));

    // Baseline instructions reference nothing.
    let instr = decode64(&[0x01, 0xc8]);
    assert_eq!(instr.cpuid_feature(), None);
}

#[test]
fn lock_needs_a_lockable_memory_destination() {
    // lock add [rbx], eax
    let instr = test_mn(&Decoder::long(), &[0xf0, 0x01, 0x03], Mnemonic::ADD);
    assert!(instr.prefixes().lock());
    assert!(instr.allowed_prefixes().contains(PrefixSet::LOCK));

    // Register destination: no encoding.
    test_invalid(&Decoder::long(), &[0xf0, 0x01, 0xc3]);
    // Non-lockable opcode: no encoding.
    test_invalid(&Decoder::long(), &[0xf0, 0x8b, 0x03]);
    // Lockable opcode but a load form: no encoding.
    test_invalid(&Decoder::long(), &[0xf0, 0x03, 0x03]);
}

#[test]
fn allowed_prefix_sets_surface() {
    let instr = decode64(&[0x01, 0x03]);
    assert!(instr.allowed_prefixes().contains(PrefixSet::LOCK));
    assert!(instr.allowed_prefixes().contains(PrefixSet::XACQUIRE));

    let instr = decode64(&[0x8b, 0x03]);
    assert!(!instr.allowed_prefixes().contains(PrefixSet::LOCK));

    let instr = decode64(&[0x74, 0x00]);
    assert!(instr.allowed_prefixes().contains(PrefixSet::BRANCH_HINT));

    let instr = decode64(&[0xf3, 0xa4]);
    assert!(instr.allowed_prefixes().contains(PrefixSet::REP));
    assert!(!instr.allowed_prefixes().contains(PrefixSet::REPNE));

    // cmps takes both repeat forms.
    let instr = decode64(&[0xf2, 0xa6]);
    assert!(instr.allowed_prefixes().contains(PrefixSet::REPNE));
}

#[test]
fn arpl_versus_movsxd_validity() {
    let instr = test_mn(&Decoder::protected(), &[0x63, 0xc8], Mnemonic::ARPL);
    assert!(instr.mode_supported());
    assert!(!instr.valid_modes().contains(ModeSet::REAL));

    let instr = super::decode16(&[0x63, 0xc8]);
    assert_eq!(instr.mnemonic(), Mnemonic::ARPL);
    assert!(!instr.mode_supported());

    let instr = test_mn(&Decoder::long(), &[0x63, 0xc8], Mnemonic::MOVSXD);
    assert!(instr.mode_supported());
}

#[test]
fn category_and_isa_tags() {
    assert_eq!(decode64(&[0x01, 0xc8]).category(), Category::Arith);
    assert_eq!(decode64(&[0x01, 0xc8]).isa_set(), IsaSet::I86);
    assert_eq!(decode64(&[0x50]).category(), Category::Push);
    assert_eq!(decode64(&[0xa4]).category(), Category::StringOp);
    assert_eq!(decode64(&[0xd8, 0xc1]).category(), Category::X87);
    assert_eq!(
        decode64(&[0xc5, 0xf0, 0x58, 0xc2]).isa_set(),
        IsaSet::Avx
    );
    let instr = decode32(&[0x60]);
    assert_eq!(instr.isa_set(), IsaSet::I186);
}
