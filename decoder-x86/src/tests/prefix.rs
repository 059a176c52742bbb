use super::{decode32, decode64, test_invalid, test_mn};
use crate::{Decoder, Mnemonic, RegSpec, Segment};
use decoder::{Decoded, ErrorKind};

#[test]
fn last_repeat_prefix_wins() {
    // f2 f2 f3 aa: the trailing f3 decides, the others are inert length.
    let instr = test_mn(&Decoder::long(), &[0xf2, 0xf2, 0xf3, 0xaa], Mnemonic::STOS);
    assert!(instr.prefixes().rep());
    assert!(!instr.prefixes().repnz());
    assert_eq!(instr.layout().prefix_len(), 3);
}

#[test]
fn rex_applies_only_directly_before_the_opcode() {
    // rex.w voided by a later 66: a 16-bit move.
    let instr = test_mn(&Decoder::long(), &[0x48, 0x66, 0xb8, 0x34, 0x12], Mnemonic::MOV);
    assert_eq!(instr.prefixes().rex(), None);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::ax()));

    // 66 then rex.w: W wins, a full 64-bit immediate follows.
    let data = [0x66, 0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8];
    let instr = test_mn(&Decoder::long(), &data, Mnemonic::MOV);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::rax()));
    assert_eq!(instr.layout().imm_len(), 8);
}

#[test]
fn rex_voided_then_reapplied() {
    // 41 66 44 01 c8: only the 44 immediately before the opcode counts.
    let instr = test_mn(&Decoder::long(), &[0x41, 0x66, 0x44, 0x01, 0xc8], Mnemonic::ADD);
    // rex.r extends the reg field: r9w.
    let src = instr.operand(1).register().unwrap();
    assert_eq!(src.num(), 9);
    assert_eq!(src.width(), 2);
}

#[test]
fn segment_override_last_wins_and_long_mode_ignores_null_segments() {
    // gs then cs: cs wins the conflict, and is inert in 64-bit mode.
    let instr = decode64(&[0x65, 0x2e, 0x8b, 0x03]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.segment, Segment::Ds);

    // cs then gs: gs wins and is honored.
    let instr = decode64(&[0x2e, 0x65, 0x8b, 0x03]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.segment, Segment::Gs);

    // In protected mode cs is honored.
    let instr = decode32(&[0x65, 0x2e, 0x8b, 0x03]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.segment, Segment::Cs);
}

#[test]
fn operand_and_address_size_toggles() {
    let instr = decode64(&[0x66, 0x01, 0xc8]);
    assert_eq!(instr.operand_width(), 2);

    let instr = decode64(&[0x67, 0x8b, 0x03]);
    assert_eq!(instr.address_width(), 4);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.base, Some(RegSpec::ebx()));

    // Toggling in the other direction for 16-bit defaults.
    let instr = super::decode16(&[0x66, 0x01, 0xc8]);
    assert_eq!(instr.operand_width(), 4);
}

#[test]
fn escape_prefix_rejects_legacy_simd_and_rex_company() {
    for lead in [0x66, 0xf2, 0xf3, 0xf0, 0x48] {
        test_invalid(&Decoder::long(), &[lead, 0xc5, 0xf8, 0x58, 0xc1]);
        test_invalid(&Decoder::long(), &[lead, 0x62, 0xf1, 0x74, 0x48, 0x58, 0xc2]);
    }
}

#[test]
fn redundant_prefixes_count_toward_length() {
    let data = [0x66, 0x66, 0x66, 0x01, 0xc8];
    let instr = decode64(&data);
    assert_eq!(instr.len(), data.len());
    assert_eq!(instr.layout().prefix_len(), 3);
    super::assert_partition(&instr);
}

#[test]
fn les_lds_versus_vex_disambiguation() {
    // In protected mode c5 with a memory-form modrm byte is LDS.
    let instr = test_mn(&Decoder::protected(), &[0xc5, 0x18], Mnemonic::LDS);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::ebx()));

    // With mod bits 11 it can only be a VEX escape.
    test_mn(&Decoder::protected(), &[0xc5, 0xf8, 0x58, 0xc1], Mnemonic::VADDPS);

    // In long mode c5 is always VEX.
    test_mn(&Decoder::long(), &[0xc5, 0xf8, 0x58, 0xc1], Mnemonic::VADDPS);
}

#[test]
fn bound_versus_evex_disambiguation() {
    let instr = test_mn(&Decoder::protected(), &[0x62, 0x08], Mnemonic::BOUND);
    // Bounds are a pair of operand-size values.
    assert_eq!(instr.operand(1).width, 8);

    test_mn(&Decoder::protected(), &[0x62, 0xf1, 0x74, 0x48, 0x58, 0xc2], Mnemonic::VADDPS);
}

#[test]
fn truncated_escape_payload() {
    let err = Decoder::long().decode_slice(&[0xc4, 0xe2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);

    let err = Decoder::long().decode_slice(&[0x62, 0xf1, 0x74]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
}
