use super::{decode32, decode64, test_invalid, test_mn};
use crate::{
    Access, Broadcast, Decoder, MemFlags, Mnemonic, OperandKind, RegSpec, Rounding, Segment,
};

#[test]
fn stack_operand_widths_in_long_mode() {
    // Default push is 64-bit, no matter that the operand-size default is 32.
    let instr = decode64(&[0x50]);
    assert_eq!(instr.operand(0).width, 8);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::rax()));

    // The 16-bit override is encodable.
    let instr = decode64(&[0x66, 0x50]);
    assert_eq!(instr.operand(0).width, 2);

    // REX.W is redundant but decodes to the same 64-bit push.
    let instr = decode64(&[0x48, 0x50]);
    assert_eq!(instr.operand(0).width, 8);

    // No encoding yields a 32-bit stack operand in 64-bit mode; in
    // protected mode the same bytes are a 32-bit push.
    let instr = decode32(&[0x50]);
    assert_eq!(instr.operand(0).width, 4);
}

#[test]
fn push_carries_its_stack_traffic() {
    let instr = decode64(&[0x50]);
    // Explicit source, implicit rsp adjustment, implicit stack cell.
    assert_eq!(instr.operand_count(), 3);
    let stack = instr.memory_operand().unwrap();
    let mem = stack.memory().unwrap();
    assert!(mem.flags.contains(MemFlags::STACK));
    assert_eq!(mem.segment, Segment::Ss);
    assert_eq!(mem.base, Some(RegSpec::rsp()));
    assert!(stack.access.may_write());
    assert!(stack.implicit);
    assert_eq!(instr.memory_width(), 8);
}

#[test]
fn immediate_materialization() {
    let instr = decode64(&[0xb8, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(instr.operand(1).kind, OperandKind::Immediate { value: 0x11223344 });

    // movabs: rex.w widens the immediate itself.
    let instr = decode64(&[0x48, 0xb8, 1, 0, 0, 0, 0, 0, 0, 0x80]);
    assert_eq!(
        instr.operand(1).kind,
        OperandKind::Immediate { value: 0x8000000000000001u64 as i64 }
    );

    // Sign-extended byte form.
    let instr = decode64(&[0x83, 0xc0, 0xff]);
    assert_eq!(instr.mnemonic(), Mnemonic::ADD);
    assert_eq!(instr.operand(1).kind, OperandKind::Immediate { value: -1 });
}

#[test]
fn relative_branches_are_end_relative() {
    let instr = decode64(&[0xeb, 0xfe]);
    assert_eq!(instr.operand(0).kind, OperandKind::Relative { offset: -2 });

    let instr = decode64(&[0xe8, 0x00, 0x10, 0x00, 0x00]);
    assert_eq!(instr.operand(0).kind, OperandKind::Relative { offset: 0x1000 });
    // Near call pushes a return address.
    assert!(instr.memory_operand().unwrap().access.may_write());

    // In 64-bit mode the offset stays 32-bit under a 66 prefix.
    let instr = decode64(&[0x66, 0xe9, 1, 0, 0, 0]);
    assert_eq!(instr.operand(0).width, 4);
}

#[test]
fn moffs_forms_use_the_address_width() {
    let data = [0xa1, 8, 7, 6, 5, 4, 3, 2, 1];
    let instr = decode64(&data);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.base, None);
    assert_eq!(mem.disp, 0x0102030405060708);
    assert_eq!(mem.disp_width, 8);
    super::assert_partition(&instr);

    // 67 shrinks the offset to 4 bytes.
    let instr = decode64(&[0x67, 0xa1, 4, 3, 2, 1]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.disp, 0x01020304);
    assert_eq!(mem.disp_width, 4);
}

#[test]
fn string_operands() {
    let instr = decode64(&[0xa4]);
    assert_eq!(instr.mnemonic(), Mnemonic::MOVS);
    let dst = instr.operand(0).memory().copied().unwrap();
    let src = instr.operand(1).memory().copied().unwrap();
    assert!(dst.flags.contains(MemFlags::STRING));
    assert_eq!(dst.segment, Segment::Es);
    assert_eq!(dst.base, Some(RegSpec::rdi()));
    assert_eq!(src.segment, Segment::Ds);
    assert_eq!(src.base, Some(RegSpec::rsi()));

    // Overrides redirect the rSI side only.
    let instr = decode64(&[0x65, 0xa4]);
    let dst = instr.operand(0).memory().copied().unwrap();
    let src = instr.operand(1).memory().copied().unwrap();
    assert_eq!(dst.segment, Segment::Es);
    assert_eq!(src.segment, Segment::Gs);
}

#[test]
fn rep_turns_string_accesses_conditional() {
    let instr = decode64(&[0xf3, 0xa4]);
    // Both memory operands plus rsi/rdi go conditional, and rcx joins.
    assert_eq!(instr.operand_count(), 5);
    assert_eq!(instr.operand(0).access, Access::CondWrite);
    assert_eq!(instr.operand(1).access, Access::CondRead);
    let counter = instr.operand(4);
    assert_eq!(counter.register(), Some(RegSpec::rcx()));
    assert_eq!(counter.access, Access::ReadWrite);

    // Without rep the accesses are unconditional.
    let instr = decode64(&[0xa4]);
    assert_eq!(instr.operand_count(), 4);
    assert_eq!(instr.operand(0).access, Access::Write);
}

#[test]
fn rep_consumed_as_mandatory_prefix_is_not_a_repeat() {
    // f3 0f b8: popcnt, not a rep of anything.
    let instr = test_mn(&Decoder::long(), &[0xf3, 0x0f, 0xb8, 0xc1], Mnemonic::POPCNT);
    assert_eq!(instr.operand_count(), 2);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::eax()));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::ecx()));
}

#[test]
fn widening_moves() {
    let instr = test_mn(&Decoder::long(), &[0x0f, 0xb6, 0xc1], Mnemonic::MOVZX);
    assert_eq!(instr.operand(0).width, 4);
    assert_eq!(instr.operand(1).width, 1);
    assert_eq!(instr.operand(1).register(), Some(RegSpec::cl()));

    let instr = test_mn(&Decoder::long(), &[0x48, 0x63, 0xc1], Mnemonic::MOVSXD);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::rax()));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::ecx()));
}

#[test]
fn byte_registers_follow_the_rex_file() {
    // Without REX: ah/ch/dh/bh.
    let instr = decode64(&[0x88, 0xe1]);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::cl()));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::ah()));

    // With REX: spl..dil replace them.
    let instr = decode64(&[0x40, 0x88, 0xe1]);
    assert_eq!(instr.operand(1).register(), Some(RegSpec::spl()));
}

#[test]
fn segment_register_moves() {
    let instr = decode64(&[0x8e, 0xd8]);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::ds()));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::ax()));

    // mov cs, ax does not encode.
    test_invalid(&Decoder::long(), &[0x8e, 0xc8]);
}

#[test]
fn bit_base_memory_forms() {
    let instr = decode64(&[0x0f, 0xa3, 0x03]);
    let mem = instr.operand(0).memory().copied().unwrap();
    assert!(mem.flags.contains(MemFlags::BIT_BASE));

    // Register forms have no bit base.
    let instr = decode64(&[0x0f, 0xa3, 0xc3]);
    assert!(instr.operand(0).is_register());
}

#[test]
fn lea_generates_no_access() {
    let instr = test_mn(&Decoder::long(), &[0x8d, 0x45, 0x08], Mnemonic::LEA);
    assert_eq!(instr.operand(1).width, 0);
    assert_eq!(instr.memory_width(), 0);

    // LEA with a register rm does not encode.
    test_invalid(&Decoder::long(), &[0x8d, 0xc0]);
}

#[test]
fn far_pointer_memory_width() {
    // call far [rip+0]: 2-byte selector plus 4-byte offset.
    let instr = decode64(&[0xff, 0x1d, 0, 0, 0, 0]);
    assert_eq!(instr.mnemonic(), Mnemonic::CALLF);
    assert_eq!(instr.operand(0).width, 6);

    // Direct far pointers only exist outside 64-bit mode.
    let instr = decode32(&[0x9a, 0x78, 0x56, 0x34, 0x12, 0x33, 0x00]);
    assert_eq!(
        instr.operand(0).kind,
        OperandKind::FarPointer { segment: 0x33, offset: 0x12345678 }
    );
    test_invalid(&Decoder::long(), &[0x9a, 0x78, 0x56, 0x34, 0x12, 0x33, 0x00]);
}

#[test]
fn fixed_64_bit_branch_targets() {
    // jmp r/m in 64-bit mode is 64-bit wide no matter the prefixes.
    let instr = decode64(&[0x66, 0xff, 0xe0]);
    assert_eq!(instr.operand(0).width, 8);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::rax()));

    // In protected mode the operand size is honored.
    let instr = decode32(&[0x66, 0xff, 0xe0]);
    assert_eq!(instr.operand(0).width, 2);
}

#[test]
fn vex_three_operand_form() {
    let instr = test_mn(&Decoder::long(), &[0xc5, 0xf0, 0x58, 0xc2], Mnemonic::VADDPS);
    assert_eq!(instr.operand_count(), 3);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::xmm(0)));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::xmm(1)));
    assert_eq!(instr.operand(2).register(), Some(RegSpec::xmm(2)));
    assert_eq!(instr.vector_width(), 16);

    // VEX.L selects ymm.
    let instr = test_mn(&Decoder::long(), &[0xc5, 0xf4, 0x58, 0xc2], Mnemonic::VADDPS);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::ymm(0)));
    assert_eq!(instr.vector_width(), 32);
}

#[test]
fn vsib_gather() {
    // vgatherdps xmm0, [rax + xmm1*2], xmm2
    let instr = test_mn(&Decoder::long(), &[0xc4, 0xe2, 0x69, 0x92, 0x04, 0x48], Mnemonic::VGATHERDPS);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert!(mem.flags.contains(MemFlags::VSIB));
    assert_eq!(mem.base, Some(RegSpec::rax()));
    assert_eq!(mem.index, Some(RegSpec::xmm(1)));
    assert_eq!(mem.scale, 2);
    assert_eq!(instr.operand(2).register(), Some(RegSpec::xmm(2)));

    // VSIB index bits 100 are xmm4, never suppressed.
    let instr = decode64(&[0xc4, 0xe2, 0x69, 0x92, 0x04, 0x60]);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.index, Some(RegSpec::xmm(4)));
}

#[test]
fn evex_decorators() {
    // vaddps xmm1{k4}, xmm1, dword bcst [rax + disp8*4]{1to4}
    let instr = test_mn(&Decoder::long(), &[0x62, 0xf1, 0x74, 0x1c, 0x58, 0x48, 0x01], Mnemonic::VADDPS);
    let mask = instr.mask().unwrap();
    assert_eq!(mask.reg, RegSpec::k(4));
    assert!(!mask.zeroing);
    assert_eq!(instr.broadcast(), Some(Broadcast::To4));

    let mem = instr.operand(2).memory().copied().unwrap();
    assert!(mem.flags.contains(MemFlags::BROADCAST));
    // Broadcast reads one element; disp8 is compressed by the element width.
    assert_eq!(instr.operand(2).width, 4);
    assert_eq!(mem.disp, 4);
    assert_eq!(mem.disp_width, 1);

    // Register forms with the b bit set get rounding control instead.
    let instr = test_mn(&Decoder::long(), &[0x62, 0xf1, 0x74, 0x18, 0x58, 0xc2], Mnemonic::VADDPS);
    assert!(instr.suppresses_exceptions());
    assert_eq!(instr.rounding(), Some(Rounding::Nearest));
    assert_eq!(instr.broadcast(), None);
}

#[test]
fn evex_disp8_compression_scales_by_access_width() {
    // vmovups zmm0, [rax + disp8*64]
    let instr = test_mn(&Decoder::long(), &[0x62, 0xf1, 0x7c, 0x48, 0x10, 0x40, 0x02], Mnemonic::VMOVUPS);
    let mem = instr.operand(1).memory().copied().unwrap();
    assert_eq!(mem.disp, 2 * 64);
    assert_eq!(mem.disp_width, 1);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::zmm(0)));
}

#[test]
fn xchg_accumulator_forms() {
    let instr = test_mn(&Decoder::long(), &[0x91], Mnemonic::XCHG);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::ecx()));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::eax()));
    assert_eq!(instr.operand(0).access, Access::ReadWrite);
}

#[test]
fn pusha_names_the_register_block() {
    let instr = decode32(&[0x60]);
    assert_eq!(instr.mnemonic(), Mnemonic::PUSHA);
    match instr.operand(0).kind {
        OperandKind::Register { reg, count } => {
            assert_eq!(reg, RegSpec::eax());
            assert_eq!(count, 8);
        }
        other => panic!("unexpected operand {:?}", other),
    }
}
