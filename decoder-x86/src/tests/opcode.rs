use super::{decode32, decode64, test_invalid, test_mn};
use crate::{Decoder, Mnemonic, RegSpec};

#[test]
fn mandatory_prefix_selection() {
    let long = Decoder::long();
    test_mn(&long, &[0x0f, 0x58, 0xc1], Mnemonic::ADDPS);
    test_mn(&long, &[0x66, 0x0f, 0x58, 0xc1], Mnemonic::ADDPD);
    test_mn(&long, &[0xf3, 0x0f, 0x58, 0xc1], Mnemonic::ADDSS);
    test_mn(&long, &[0xf2, 0x0f, 0x58, 0xc1], Mnemonic::ADDSD);

    // A repeat prefix outranks 66 when both could select.
    test_mn(&long, &[0x66, 0xf2, 0x0f, 0x58, 0xc1], Mnemonic::ADDSD);

    // The selected prefix loses its operand-size meaning: ADDPD still has
    // a full-width xmm operand.
    let instr = decode64(&[0x66, 0x0f, 0x58, 0xc1]);
    assert_eq!(instr.operand(0).width, 16);
}

#[test]
fn nop_pause_split() {
    test_mn(&Decoder::long(), &[0x90], Mnemonic::NOP);
    test_mn(&Decoder::long(), &[0xf3, 0x90], Mnemonic::PAUSE);
    // 66 90 is still a nop; the 66 slot is empty and falls back.
    test_mn(&Decoder::long(), &[0x66, 0x90], Mnemonic::NOP);
}

#[test]
fn modrm_reg_groups() {
    let long = Decoder::long();
    test_mn(&long, &[0x80, 0xc1, 0x10], Mnemonic::ADD);
    test_mn(&long, &[0x80, 0xf9, 0x10], Mnemonic::CMP);
    test_mn(&long, &[0xf6, 0xd8], Mnemonic::NEG);
    test_mn(&long, &[0xf6, 0x18], Mnemonic::NEG);
    test_mn(&long, &[0xf7, 0xe1], Mnemonic::MUL);
    test_mn(&long, &[0xfe, 0xc8], Mnemonic::DEC);
    test_mn(&long, &[0xff, 0x30], Mnemonic::PUSH);
    test_mn(&long, &[0xff, 0xe0], Mnemonic::JMP);

    // f6 /1 is undefined space.
    test_invalid(&long, &[0xf6, 0xc8, 0x01]);
}

#[test]
fn shift_group_aliases() {
    // /4 and /6 both decode as SHL.
    test_mn(&Decoder::long(), &[0xc0, 0xe0, 0x03], Mnemonic::SHL);
    test_mn(&Decoder::long(), &[0xc0, 0xf0, 0x03], Mnemonic::SHL);
    test_mn(&Decoder::long(), &[0xd1, 0xf8], Mnemonic::SAR);
    test_mn(&Decoder::long(), &[0xd3, 0xd0], Mnemonic::RCL);
}

#[test]
fn osz_selected_mnemonics() {
    assert_eq!(decode64(&[0x98]).mnemonic(), Mnemonic::CWDE);
    assert_eq!(decode64(&[0x66, 0x98]).mnemonic(), Mnemonic::CBW);
    assert_eq!(decode64(&[0x48, 0x98]).mnemonic(), Mnemonic::CDQE);
    assert_eq!(decode64(&[0x99]).mnemonic(), Mnemonic::CDQ);
    assert_eq!(decode64(&[0x48, 0x99]).mnemonic(), Mnemonic::CQO);
    assert_eq!(decode64(&[0xcf]).mnemonic(), Mnemonic::IRETD);
    assert_eq!(decode64(&[0x48, 0xcf]).mnemonic(), Mnemonic::IRETQ);
    assert_eq!(decode32(&[0x66, 0xcf]).mnemonic(), Mnemonic::IRET);
}

#[test]
fn asz_selected_mnemonics() {
    assert_eq!(decode64(&[0xe3, 0x00]).mnemonic(), Mnemonic::JRCXZ);
    assert_eq!(decode64(&[0x67, 0xe3, 0x00]).mnemonic(), Mnemonic::JECXZ);
    assert_eq!(decode32(&[0xe3, 0x00]).mnemonic(), Mnemonic::JECXZ);
    assert_eq!(decode32(&[0x67, 0xe3, 0x00]).mnemonic(), Mnemonic::JCXZ);
}

#[test]
fn mode_reclaimed_encodings() {
    // 0x63 is ARPL in legacy modes and MOVSXD in 64-bit mode.
    assert_eq!(decode32(&[0x63, 0xc8]).mnemonic(), Mnemonic::ARPL);
    assert_eq!(decode64(&[0x63, 0xc8]).mnemonic(), Mnemonic::MOVSXD);

    // 0x40 is INC in legacy modes, REX in 64-bit mode.
    assert_eq!(decode32(&[0x40]).mnemonic(), Mnemonic::INC);
    let instr = decode64(&[0x40, 0x90]);
    assert_eq!(instr.mnemonic(), Mnemonic::NOP);
    assert_eq!(instr.layout().prefix_len(), 1);
}

#[test]
fn system_leaf_dispatch() {
    let long = Decoder::long();
    test_mn(&long, &[0x0f, 0x01, 0xc1], Mnemonic::VMCALL);
    test_mn(&long, &[0x0f, 0x01, 0xc2], Mnemonic::VMLAUNCH);
    test_mn(&long, &[0x0f, 0x01, 0xc8], Mnemonic::MONITOR);
    test_mn(&long, &[0x0f, 0x01, 0xc9], Mnemonic::MWAIT);
    test_mn(&long, &[0x0f, 0x01, 0xd0], Mnemonic::XGETBV);
    test_mn(&long, &[0x0f, 0x01, 0xf8], Mnemonic::SWAPGS);
    test_mn(&long, &[0x0f, 0x01, 0xf9], Mnemonic::RDTSCP);
    test_mn(&long, &[0x0f, 0x01, 0x00], Mnemonic::SGDT);
    test_mn(&long, &[0x0f, 0x01, 0x10], Mnemonic::LGDT);
    test_mn(&long, &[0x0f, 0x01, 0x38], Mnemonic::INVLPG);
    test_mn(&long, &[0x0f, 0x00, 0xd8], Mnemonic::LTR);

    // 0f01 /5 is undefined.
    test_invalid(&long, &[0x0f, 0x01, 0xe8]);
}

#[test]
fn group9_prefix_and_width_splits() {
    let long = Decoder::long();
    test_mn(&long, &[0x0f, 0xc7, 0x08], Mnemonic::CMPXCHG8B);
    test_mn(&long, &[0x48, 0x0f, 0xc7, 0x08], Mnemonic::CMPXCHG16B);
    test_mn(&long, &[0x0f, 0xc7, 0xf0], Mnemonic::RDRAND);
    test_mn(&long, &[0x0f, 0xc7, 0xf8], Mnemonic::RDSEED);
    test_mn(&long, &[0x0f, 0xc7, 0x30], Mnemonic::VMPTRLD);
    test_mn(&long, &[0x66, 0x0f, 0xc7, 0x30], Mnemonic::VMCLEAR);
    test_mn(&long, &[0xf3, 0x0f, 0xc7, 0x30], Mnemonic::VMXON);
    test_mn(&long, &[0x0f, 0xc7, 0x38], Mnemonic::VMPTRST);
}

#[test]
fn fence_and_state_group() {
    let long = Decoder::long();
    test_mn(&long, &[0x0f, 0xae, 0xe8], Mnemonic::LFENCE);
    test_mn(&long, &[0x0f, 0xae, 0xf0], Mnemonic::MFENCE);
    test_mn(&long, &[0x0f, 0xae, 0xf8], Mnemonic::SFENCE);
    test_mn(&long, &[0x0f, 0xae, 0x38], Mnemonic::CLFLUSH);
    test_mn(&long, &[0x0f, 0xae, 0x00], Mnemonic::FXSAVE);
    test_mn(&long, &[0x0f, 0xae, 0x10], Mnemonic::LDMXCSR);
}

#[test]
fn x87_dispatch() {
    let long = Decoder::long();
    let instr = test_mn(&long, &[0xd8, 0xc1], Mnemonic::FADD);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::st(0)));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::st(1)));

    // DC targets st(i).
    let instr = test_mn(&long, &[0xdc, 0xc1], Mnemonic::FADD);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::st(1)));
    assert_eq!(instr.operand(1).register(), Some(RegSpec::st(0)));

    let instr = test_mn(&long, &[0xd8, 0x00], Mnemonic::FADD);
    assert_eq!(instr.memory_width(), 4);
    let instr = test_mn(&long, &[0xdc, 0x00], Mnemonic::FADD);
    assert_eq!(instr.memory_width(), 8);

    test_mn(&long, &[0xd9, 0xe8], Mnemonic::FLD1);
    test_mn(&long, &[0xd9, 0xfa], Mnemonic::FSQRT);
    test_mn(&long, &[0xd9, 0xd0], Mnemonic::FNOP);
    test_mn(&long, &[0xdb, 0xe2], Mnemonic::FNCLEX);
    test_mn(&long, &[0xda, 0xe9], Mnemonic::FUCOMPP);
    test_mn(&long, &[0xde, 0xd9], Mnemonic::FCOMPP);
    test_mn(&long, &[0xdb, 0xf1], Mnemonic::FCOMI);

    let instr = test_mn(&long, &[0xdf, 0xe0], Mnemonic::FNSTSW);
    assert_eq!(instr.operand(0).register(), Some(RegSpec::ax()));

    let instr = test_mn(&long, &[0xdd, 0x45, 0x08], Mnemonic::FLD);
    assert_eq!(instr.memory_width(), 8);

    // Undefined register rows stay undefined.
    test_invalid(&long, &[0xd9, 0xe2]);
    test_invalid(&long, &[0xde, 0xc0]);
}

#[test]
fn three_byte_maps() {
    let long = Decoder::long();
    test_mn(&long, &[0x66, 0x0f, 0x38, 0x00, 0xc1], Mnemonic::PSHUFB);
    test_mn(&long, &[0x0f, 0x38, 0xf0, 0x03], Mnemonic::MOVBE);
    test_mn(&long, &[0xf2, 0x0f, 0x38, 0xf1, 0xd9], Mnemonic::CRC32);
    test_mn(&long, &[0x66, 0x0f, 0x38, 0xf6, 0xc1], Mnemonic::ADCX);
    test_mn(&long, &[0xf3, 0x0f, 0x38, 0xf6, 0xc1], Mnemonic::ADOX);
    test_mn(&long, &[0x66, 0x0f, 0x3a, 0x0f, 0xc1, 0x04], Mnemonic::PALIGNR);
    test_mn(&long, &[0x66, 0x0f, 0x3a, 0x63, 0xc1, 0x0c], Mnemonic::PCMPISTRI);

    // MOVBE's memory-only rm rejects register forms.
    test_invalid(&long, &[0x0f, 0x38, 0xf0, 0xc3]);
}

#[test]
fn vex_dispatch() {
    let long = Decoder::long();
    test_mn(&long, &[0xc5, 0xf8, 0x77], Mnemonic::VZEROUPPER);
    test_mn(&long, &[0xc5, 0xfc, 0x77], Mnemonic::VZEROALL);
    test_mn(&long, &[0xc5, 0xf9, 0x6f, 0xc1], Mnemonic::VMOVDQA);
    test_mn(&long, &[0xc5, 0xfa, 0x6f, 0xc1], Mnemonic::VMOVDQU);

    // BMI through vex map 2.
    let instr = test_mn(&long, &[0xc4, 0xe2, 0x70, 0xf2, 0xc3], Mnemonic::ANDN);
    assert_eq!(instr.operand(1).register(), Some(RegSpec::ecx()));
    test_mn(&long, &[0xc4, 0xe2, 0x70, 0xf3, 0xcb], Mnemonic::BLSR);
    test_mn(&long, &[0xc4, 0xe2, 0x71, 0xf7, 0xc3], Mnemonic::SHLX);

    // Undefined vex opcode space.
    test_invalid(&long, &[0xc5, 0xf8, 0x01, 0xc0]);
}

#[test]
fn evex_w_split() {
    let long = Decoder::long();
    test_mn(&long, &[0x62, 0xf1, 0x7d, 0x48, 0x6f, 0xc1], Mnemonic::VMOVDQA32);
    test_mn(&long, &[0x62, 0xf1, 0xfd, 0x48, 0x6f, 0xc1], Mnemonic::VMOVDQA64);
}

#[test]
fn undefined_opcode_space() {
    let long = Decoder::long();
    test_invalid(&long, &[0x0f, 0x04]);
    test_invalid(&long, &[0x0f, 0xff]);
    test_invalid(&long, &[0x0f, 0x38, 0x01, 0xc0]);
    test_invalid(&long, &[0xd6]);
    // ud2 is a *defined* undefined instruction.
    test_mn(&long, &[0x0f, 0x0b], Mnemonic::UD2);
}

#[test]
fn xop_prefix_versus_pop_group() {
    let long = Decoder::long();
    // 8f with a low map selector is POP r/m.
    let instr = test_mn(&long, &[0x8f, 0x45, 0x00], Mnemonic::POP);
    assert!(instr.operand(0).is_memory());
    test_mn(&long, &[0x8f, 0xc1], Mnemonic::POP);

    // A map selector of 8+ makes it an XOP escape, and this table build
    // carries no XOP definitions.
    test_invalid(&long, &[0x8f, 0xe8, 0x78, 0x10, 0xc0]);
}
