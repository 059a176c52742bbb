//! VEX opcode maps 1-3.
//!
//! The map is selected by the escape prefix's `mmmmm` field; the embedded
//! `pp` bits act as an exact mandatory-prefix selector.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::{imm, od, reg, rm, xreg, xrm, GroupSelect, InstDef, OpSpec, OpcodeSlot as Op, PrefixSelect, Sz::*, VlSelect, VsibIndex, WSelect};
use crate::flags::effect as f;
use crate::flags::{Flag, FlagAccess};
use crate::meta::{cpuid, Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

const ___: Op = Op::None;

const fn avx(mnemonic: Mn, operands: &'static [super::OperandDef]) -> InstDef {
    InstDef::new(mnemonic, operands, f::NONE, M::ANY, PS::NONE, C::Avx, S::Avx)
}

// Map 1: moves and float arithmetic.

static VMOVUPS_G_E: InstDef = avx(Mn::VMOVUPS, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMOVUPS_E_G: InstDef = avx(Mn::VMOVUPS, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX);
static VMOVUPD_G_E: InstDef = avx(Mn::VMOVUPD, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMOVUPD_E_G: InstDef = avx(Mn::VMOVUPD, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX);
static VMOVSS_G_E: InstDef = avx(Mn::VMOVSS, &[xreg(D, Write), xrm(D, Read)]).cpuid(&cpuid::AVX);
static VMOVSS_E_G: InstDef = avx(Mn::VMOVSS, &[xrm(D, Write), xreg(D, Read)]).cpuid(&cpuid::AVX);
static VMOVSD_G_E: InstDef = avx(Mn::VMOVSD, &[xreg(Q, Write), xrm(Q, Read)]).cpuid(&cpuid::AVX);
static VMOVSD_E_G: InstDef = avx(Mn::VMOVSD, &[xrm(Q, Write), xreg(Q, Read)]).cpuid(&cpuid::AVX);

static V1_10: PrefixSelect = PrefixSelect { none: Op::Inst(&VMOVUPS_G_E), p66: Op::Inst(&VMOVUPD_G_E), pf3: Op::Inst(&VMOVSS_G_E), pf2: Op::Inst(&VMOVSD_G_E) };
static V1_11: PrefixSelect = PrefixSelect { none: Op::Inst(&VMOVUPS_E_G), p66: Op::Inst(&VMOVUPD_E_G), pf3: Op::Inst(&VMOVSS_E_G), pf2: Op::Inst(&VMOVSD_E_G) };

static VMOVAPS_G_E: InstDef = avx(Mn::VMOVAPS, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMOVAPS_E_G: InstDef = avx(Mn::VMOVAPS, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX);
static VMOVAPD_G_E: InstDef = avx(Mn::VMOVAPD, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMOVAPD_E_G: InstDef = avx(Mn::VMOVAPD, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX);

static V1_28: PrefixSelect = PrefixSelect { none: Op::Inst(&VMOVAPS_G_E), p66: Op::Inst(&VMOVAPD_G_E), pf3: ___, pf2: ___ };
static V1_29: PrefixSelect = PrefixSelect { none: Op::Inst(&VMOVAPS_E_G), p66: Op::Inst(&VMOVAPD_E_G), pf3: ___, pf2: ___ };

static VANDPS: InstDef = avx(Mn::VANDPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VXORPS: InstDef = avx(Mn::VXORPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);

static V1_54: PrefixSelect = PrefixSelect { none: Op::Inst(&VANDPS), p66: ___, pf3: ___, pf2: ___ };
static V1_57: PrefixSelect = PrefixSelect { none: Op::Inst(&VXORPS), p66: ___, pf3: ___, pf2: ___ };

static VADDPS: InstDef = avx(Mn::VADDPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VADDPD: InstDef = avx(Mn::VADDPD, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VADDSS: InstDef = avx(Mn::VADDSS, &[xreg(D, Write), od(OpSpec::VvvvVec, DQ, Read), xrm(D, Read)]).cpuid(&cpuid::AVX);
static VADDSD: InstDef = avx(Mn::VADDSD, &[xreg(Q, Write), od(OpSpec::VvvvVec, DQ, Read), xrm(Q, Read)]).cpuid(&cpuid::AVX);
static VMULPS: InstDef = avx(Mn::VMULPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMULPD: InstDef = avx(Mn::VMULPD, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VSUBPS: InstDef = avx(Mn::VSUBPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VSUBPD: InstDef = avx(Mn::VSUBPD, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VDIVPS: InstDef = avx(Mn::VDIVPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VDIVPD: InstDef = avx(Mn::VDIVPD, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);

static V1_58: PrefixSelect = PrefixSelect { none: Op::Inst(&VADDPS), p66: Op::Inst(&VADDPD), pf3: Op::Inst(&VADDSS), pf2: Op::Inst(&VADDSD) };
static V1_59: PrefixSelect = PrefixSelect { none: Op::Inst(&VMULPS), p66: Op::Inst(&VMULPD), pf3: ___, pf2: ___ };
static V1_5C: PrefixSelect = PrefixSelect { none: Op::Inst(&VSUBPS), p66: Op::Inst(&VSUBPD), pf3: ___, pf2: ___ };
static V1_5E: PrefixSelect = PrefixSelect { none: Op::Inst(&VDIVPS), p66: Op::Inst(&VDIVPD), pf3: ___, pf2: ___ };

static VMOVDQA_G_E: InstDef = avx(Mn::VMOVDQA, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMOVDQA_E_G: InstDef = avx(Mn::VMOVDQA, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX);
static VMOVDQU_G_E: InstDef = avx(Mn::VMOVDQU, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX);
static VMOVDQU_E_G: InstDef = avx(Mn::VMOVDQU, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX);

static V1_6F: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VMOVDQA_G_E), pf3: Op::Inst(&VMOVDQU_G_E), pf2: ___ };
static V1_7F: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VMOVDQA_E_G), pf3: Op::Inst(&VMOVDQU_E_G), pf2: ___ };

// VEX.L picks VZEROUPPER vs VZEROALL.

static VZEROUPPER: InstDef = avx(Mn::VZEROUPPER, &[]).cpuid(&cpuid::AVX);
static VZEROALL: InstDef = avx(Mn::VZEROALL, &[]).cpuid(&cpuid::AVX);
static V1_77_VL: VlSelect = VlSelect { l128: Op::Inst(&VZEROUPPER), l256: Op::Inst(&VZEROALL), l512: ___ };
static V1_77: PrefixSelect = PrefixSelect { none: Op::Vl(&V1_77_VL), p66: ___, pf3: ___, pf2: ___ };

static VPXOR: InstDef = avx(Mn::VPXOR, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX);
static V1_EF: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VPXOR), pf3: ___, pf2: ___ };

pub(crate) static MAP1: [Op; 256] = {
    let mut map = [___; 256];
    map[0x10] = Op::Pfx(&V1_10);
    map[0x11] = Op::Pfx(&V1_11);
    map[0x28] = Op::Pfx(&V1_28);
    map[0x29] = Op::Pfx(&V1_29);
    map[0x54] = Op::Pfx(&V1_54);
    map[0x57] = Op::Pfx(&V1_57);
    map[0x58] = Op::Pfx(&V1_58);
    map[0x59] = Op::Pfx(&V1_59);
    map[0x5c] = Op::Pfx(&V1_5C);
    map[0x5e] = Op::Pfx(&V1_5E);
    map[0x6f] = Op::Pfx(&V1_6F);
    map[0x77] = Op::Pfx(&V1_77);
    map[0x7f] = Op::Pfx(&V1_7F);
    map[0xef] = Op::Pfx(&V1_EF);
    map
};

// Map 2: broadcasts, gathers and the BMI block.

static VBROADCASTSS: InstDef = avx(Mn::VBROADCASTSS, &[xreg(X, Write), xrm(D, Read)]).cpuid(&cpuid::AVX);
static VBROADCASTSD: InstDef = avx(Mn::VBROADCASTSD, &[xreg(X, Write), xrm(Q, Read)]).cpuid(&cpuid::AVX);
static V2_18: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VBROADCASTSS), pf3: ___, pf2: ___ };
static V2_19: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VBROADCASTSD), pf3: ___, pf2: ___ };

// VEX gathers carry a vector write-mask in vvvv; both it and the
// destination are written back.

static VPGATHERDD: InstDef = InstDef::new(Mn::VPGATHERDD, &[xreg(X, ReadWrite), od(OpSpec::RmMemVsib(VsibIndex::D), D, Read), od(OpSpec::VvvvVec, X, ReadWrite)], f::NONE, M::ANY, PS::NONE, C::Avx, S::Avx2).cpuid(&cpuid::AVX2);
static VPGATHERDQ: InstDef = InstDef::new(Mn::VPGATHERDQ, &[xreg(X, ReadWrite), od(OpSpec::RmMemVsib(VsibIndex::D), Q, Read), od(OpSpec::VvvvVec, X, ReadWrite)], f::NONE, M::ANY, PS::NONE, C::Avx, S::Avx2).cpuid(&cpuid::AVX2);
static VGATHERDPS: InstDef = InstDef::new(Mn::VGATHERDPS, &[xreg(X, ReadWrite), od(OpSpec::RmMemVsib(VsibIndex::D), D, Read), od(OpSpec::VvvvVec, X, ReadWrite)], f::NONE, M::ANY, PS::NONE, C::Avx, S::Avx2).cpuid(&cpuid::AVX2);
static VGATHERDPD: InstDef = InstDef::new(Mn::VGATHERDPD, &[xreg(X, ReadWrite), od(OpSpec::RmMemVsib(VsibIndex::D), Q, Read), od(OpSpec::VvvvVec, X, ReadWrite)], f::NONE, M::ANY, PS::NONE, C::Avx, S::Avx2).cpuid(&cpuid::AVX2);

static V2_90_W: WSelect = WSelect { w0: Op::Inst(&VPGATHERDD), w1: Op::Inst(&VPGATHERDQ) };
static V2_92_W: WSelect = WSelect { w0: Op::Inst(&VGATHERDPS), w1: Op::Inst(&VGATHERDPD) };
static V2_90: PrefixSelect = PrefixSelect { none: ___, p66: Op::W(&V2_90_W), pf3: ___, pf2: ___ };
static V2_92: PrefixSelect = PrefixSelect { none: ___, p66: Op::W(&V2_92_W), pf3: ___, pf2: ___ };

// ANDN: SF/ZF from the result, CF/OF cleared.

static ANDN_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::Of, FlagAccess::Cleared),
    (Flag::Sf, FlagAccess::Modified),
    (Flag::Zf, FlagAccess::Modified),
    (Flag::Af, FlagAccess::Undefined),
    (Flag::Pf, FlagAccess::Undefined),
    (Flag::Cf, FlagAccess::Cleared),
];

static ANDN: InstDef = InstDef::new(Mn::ANDN, &[reg(V, Write), od(OpSpec::VvvvGp, V, Read), rm(V, Read)], ANDN_EFFECTS, M::ANY, PS::NONE, C::Binary, S::Bmi1).cpuid(&cpuid::BMI1);
static V2_F2: PrefixSelect = PrefixSelect { none: Op::Inst(&ANDN), p66: ___, pf3: ___, pf2: ___ };

// Group 17: BLSR/BLSMSK/BLSI operate rm -> vvvv.

static BLS_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::Of, FlagAccess::Cleared),
    (Flag::Sf, FlagAccess::Modified),
    (Flag::Zf, FlagAccess::Modified),
    (Flag::Cf, FlagAccess::Modified),
];

static BLSR: InstDef = InstDef::new(Mn::BLSR, &[od(OpSpec::VvvvGp, V, Write), rm(V, Read)], BLS_EFFECTS, M::ANY, PS::NONE, C::Bit, S::Bmi1).cpuid(&cpuid::BMI1);
static BLSMSK: InstDef = InstDef::new(Mn::BLSMSK, &[od(OpSpec::VvvvGp, V, Write), rm(V, Read)], BLS_EFFECTS, M::ANY, PS::NONE, C::Bit, S::Bmi1).cpuid(&cpuid::BMI1);
static BLSI: InstDef = InstDef::new(Mn::BLSI, &[od(OpSpec::VvvvGp, V, Write), rm(V, Read)], BLS_EFFECTS, M::ANY, PS::NONE, C::Bit, S::Bmi1).cpuid(&cpuid::BMI1);

static GRP17: GroupSelect = GroupSelect {
    slots: [___, Op::Inst(&BLSR), Op::Inst(&BLSMSK), Op::Inst(&BLSI), ___, ___, ___, ___],
};
static V2_F3: PrefixSelect = PrefixSelect { none: Op::Grp(&GRP17), p66: ___, pf3: ___, pf2: ___ };

static SHLX: InstDef = InstDef::new(Mn::SHLX, &[reg(V, Write), rm(V, Read), od(OpSpec::VvvvGp, V, Read)], f::NONE, M::ANY, PS::NONE, C::Shift, S::Bmi2).cpuid(&cpuid::BMI2);
static SARX: InstDef = InstDef::new(Mn::SARX, &[reg(V, Write), rm(V, Read), od(OpSpec::VvvvGp, V, Read)], f::NONE, M::ANY, PS::NONE, C::Shift, S::Bmi2).cpuid(&cpuid::BMI2);
static SHRX: InstDef = InstDef::new(Mn::SHRX, &[reg(V, Write), rm(V, Read), od(OpSpec::VvvvGp, V, Read)], f::NONE, M::ANY, PS::NONE, C::Shift, S::Bmi2).cpuid(&cpuid::BMI2);

static V2_F7: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&SHLX), pf3: Op::Inst(&SARX), pf2: Op::Inst(&SHRX) };

pub(crate) static MAP2: [Op; 256] = {
    let mut map = [___; 256];
    map[0x18] = Op::Pfx(&V2_18);
    map[0x19] = Op::Pfx(&V2_19);
    map[0x90] = Op::Pfx(&V2_90);
    map[0x92] = Op::Pfx(&V2_92);
    map[0xf2] = Op::Pfx(&V2_F2);
    map[0xf3] = Op::Pfx(&V2_F3);
    map[0xf7] = Op::Pfx(&V2_F7);
    map
};

// Map 3: 128-bit lane insert/extract.

static VINSERTF128: InstDef = avx(Mn::VINSERTF128, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(DQ, Read), imm(B)]).cpuid(&cpuid::AVX);
static VEXTRACTF128: InstDef = avx(Mn::VEXTRACTF128, &[xrm(DQ, Write), xreg(X, Read), imm(B)]).cpuid(&cpuid::AVX);

static V3_18: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VINSERTF128), pf3: ___, pf2: ___ };
static V3_19: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&VEXTRACTF128), pf3: ___, pf2: ___ };

pub(crate) static MAP3: [Op; 256] = {
    let mut map = [___; 256];
    map[0x18] = Op::Pfx(&V3_18);
    map[0x19] = Op::Pfx(&V3_19);
    map
};
