use super::{decode16, decode32, decode64, test_too_small};
use crate::{Decoder, MemFlags, RegSpec};
use decoder::Decoded;

#[test]
fn register_direct() {
    let instr = decode64(&[0x01, 0xd8]);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::eax()));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::ebx()));
}

#[test]
fn sib_composition() {
    // add [rbx + rcx*4 + 0x10], eax
    let instr = decode64(&[0x01, 0x44, 0x8b, 0x10]);
    let mem = instr.operand(0).memory().copied().unwrap();
    assert_eq!(mem.base, Some(RegSpec::rbx()));
    assert_eq!(mem.index, Some(RegSpec::rcx()));
    assert_eq!(mem.scale, 4);
    assert_eq!(mem.disp, 0x10);
    assert_eq!(mem.disp_width, 1);
    super::assert_partition(&instr);
}

#[test]
fn index_suppression_ignores_scale() {
    // SIB with index bits 100 and scale 8: no index register applies.
    let instr = decode64(&[0x8b, 0x04, 0xe3]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.base, Some(RegSpec::rbx()));
    assert_eq!(mem.index, None);
    assert_eq!(mem.scale, 1);

    // REX.X turns the same bits into r12.
    let instr = decode64(&[0x42, 0x8b, 0x04, 0xe3]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.index, Some(RegSpec::r12()));
    assert_eq!(mem.scale, 8);
}

#[test]
fn rip_relative_versus_absolute() {
    // mod=0 rm=5 in 64-bit mode: rip-relative.
    let instr = decode64(&[0x8b, 0x05, 0x78, 0x56, 0x34, 0x12]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert!(mem.flags.contains(MemFlags::RIP_RELATIVE));
    assert_eq!(mem.base, Some(RegSpec::RIP));
    assert_eq!(mem.disp, 0x12345678);

    // mod=0, SIB base=5, index=4: absolute disp32 even in 64-bit mode.
    let instr = decode64(&[0x8b, 0x04, 0x25, 0x78, 0x56, 0x34, 0x12]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert!(!mem.flags.contains(MemFlags::RIP_RELATIVE));
    assert_eq!(mem.base, None);
    assert_eq!(mem.index, None);
    assert_eq!(mem.disp, 0x12345678);

    // The same encoding in protected mode is the plain absolute form.
    let instr = decode32(&[0x8b, 0x05, 0x78, 0x56, 0x34, 0x12]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert!(!mem.flags.contains(MemFlags::RIP_RELATIVE));
    assert_eq!(mem.base, None);
}

#[test]
fn sixteen_bit_addressing_forms() {
    // mov ax, [bp+si+8]
    let instr = decode16(&[0x8b, 0x42, 0x08]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.base, Some(RegSpec::bp()));
    assert_eq!(mem.index, Some(RegSpec::si()));
    assert_eq!(mem.disp, 8);
    // BP-based addressing defaults to SS.
    assert_eq!(mem.segment, crate::Segment::Ss);

    // mod=0 rm=6: absolute disp16.
    let instr = decode16(&[0x8b, 0x06, 0x34, 0x12]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.base, None);
    assert_eq!(mem.disp, 0x1234);
    assert_eq!(mem.disp_width, 2);

    // A 67 prefix in protected mode selects the same table.
    let instr = decode32(&[0x67, 0x8b, 0x42, 0x08]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.base, Some(RegSpec::bp()));
    assert_eq!(mem.index, Some(RegSpec::si()));
}

#[test]
fn segment_defaulting() {
    // rbp base defaults to SS.
    let instr = decode64(&[0x8b, 0x45, 0x00]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.segment, crate::Segment::Ss);

    // r13 is not rbp: DS.
    let instr = decode64(&[0x41, 0x8b, 0x45, 0x00]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.segment, crate::Segment::Ds);

    // Overrides win. FS is honored in 64-bit mode.
    let instr = decode64(&[0x64, 0x8b, 0x45, 0x00]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.segment, crate::Segment::Fs);
}

#[test]
fn control_register_moves_force_register_direct() {
    // mov cr0, rax
    let instr = decode64(&[0x0f, 0x22, 0xc0]);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::cr(0)));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::rax()));

    // mod bits of 01 still consume their displacement byte, as length only.
    let instr = decode64(&[0x0f, 0x22, 0x45, 0x10]);
    assert_eq!(instr.len(), 4);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::cr(0)));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::rbp()));
    assert!(instr.memory_operand().is_none());
    super::assert_partition(&instr);

    // Debug registers behave the same.
    let instr = decode64(&[0x0f, 0x21, 0xc1]);
    assert_eq!(instr.operand(1).register(), Some(RegSpec::dr(0)));
    assert_eq!(instr.operand(0).register(), Some(RegSpec::rcx()));
}

#[test]
fn truncation_after_the_opcode_is_never_reinterpreted() {
    let full: &[u8] = &[0x01, 0x44, 0x8b, 0x10];
    for cut in 1..full.len() {
        test_too_small(&Decoder::long(), &full[..cut]);
    }

    let full: &[u8] = &[0x8b, 0x05, 0x78, 0x56, 0x34, 0x12];
    for cut in 1..full.len() {
        test_too_small(&Decoder::long(), &full[..cut]);
    }
}
