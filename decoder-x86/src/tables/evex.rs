//! EVEX opcode maps 1-3.
//!
//! Like the VEX maps, keyed by the escape's map field with `pp` as an exact
//! mandatory-prefix selector. Definitions carry their element width for
//! disp8 compression and broadcast-factor derivation.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::{od, xreg, xrm, InstDef, OpSpec, OpcodeSlot as Op, PrefixSelect, Sz::*, VsibIndex, WSelect};
use crate::flags::effect as f;
use crate::meta::{cpuid, Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

const ___: Op = Op::None;

const fn avx512(mnemonic: Mn, operands: &'static [super::OperandDef]) -> InstDef {
    InstDef::new(mnemonic, operands, f::NONE, M::ANY, PS::NONE, C::Avx512, S::Avx512F)
}

// Map 1.

static VMOVUPS_G_E: InstDef = avx512(Mn::VMOVUPS, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VMOVUPS_E_G: InstDef = avx512(Mn::VMOVUPS, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VMOVUPD_G_E: InstDef = avx512(Mn::VMOVUPD, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(8);
static VMOVUPD_E_G: InstDef = avx512(Mn::VMOVUPD, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX512F).elem(8);
static VMOVSS_G_E: InstDef = avx512(Mn::VMOVSS, &[xreg(D, Write), xrm(D, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VMOVSS_E_G: InstDef = avx512(Mn::VMOVSS, &[xrm(D, Write), xreg(D, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VMOVSD_G_E: InstDef = avx512(Mn::VMOVSD, &[xreg(Q, Write), xrm(Q, Read)]).cpuid(&cpuid::AVX512F).elem(8);
static VMOVSD_E_G: InstDef = avx512(Mn::VMOVSD, &[xrm(Q, Write), xreg(Q, Read)]).cpuid(&cpuid::AVX512F).elem(8);

static E1_10: PrefixSelect = PrefixSelect { none: Op::Inst(&VMOVUPS_G_E), p66: Op::Inst(&VMOVUPD_G_E), pf3: Op::Inst(&VMOVSS_G_E), pf2: Op::Inst(&VMOVSD_G_E) };
static E1_11: PrefixSelect = PrefixSelect { none: Op::Inst(&VMOVUPS_E_G), p66: Op::Inst(&VMOVUPD_E_G), pf3: Op::Inst(&VMOVSS_E_G), pf2: Op::Inst(&VMOVSD_E_G) };

static VADDPS: InstDef = avx512(Mn::VADDPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VADDPD: InstDef = avx512(Mn::VADDPD, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(8);
static VADDSS: InstDef = avx512(Mn::VADDSS, &[xreg(D, Write), od(OpSpec::VvvvVec, DQ, Read), xrm(D, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VADDSD: InstDef = avx512(Mn::VADDSD, &[xreg(Q, Write), od(OpSpec::VvvvVec, DQ, Read), xrm(Q, Read)]).cpuid(&cpuid::AVX512F).elem(8);
static VSUBPS: InstDef = avx512(Mn::VSUBPS, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VSUBPD: InstDef = avx512(Mn::VSUBPD, &[xreg(X, Write), od(OpSpec::VvvvVec, X, Read), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(8);

static E1_58: PrefixSelect = PrefixSelect { none: Op::Inst(&VADDPS), p66: Op::Inst(&VADDPD), pf3: Op::Inst(&VADDSS), pf2: Op::Inst(&VADDSD) };
static E1_5C: PrefixSelect = PrefixSelect { none: Op::Inst(&VSUBPS), p66: Op::Inst(&VSUBPD), pf3: ___, pf2: ___ };

static VMOVDQA32_G_E: InstDef = avx512(Mn::VMOVDQA32, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VMOVDQA64_G_E: InstDef = avx512(Mn::VMOVDQA64, &[xreg(X, Write), xrm(X, Read)]).cpuid(&cpuid::AVX512F).elem(8);
static VMOVDQA32_E_G: InstDef = avx512(Mn::VMOVDQA32, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VMOVDQA64_E_G: InstDef = avx512(Mn::VMOVDQA64, &[xrm(X, Write), xreg(X, Read)]).cpuid(&cpuid::AVX512F).elem(8);

static E1_6F_W: WSelect = WSelect { w0: Op::Inst(&VMOVDQA32_G_E), w1: Op::Inst(&VMOVDQA64_G_E) };
static E1_7F_W: WSelect = WSelect { w0: Op::Inst(&VMOVDQA32_E_G), w1: Op::Inst(&VMOVDQA64_E_G) };
static E1_6F: PrefixSelect = PrefixSelect { none: ___, p66: Op::W(&E1_6F_W), pf3: ___, pf2: ___ };
static E1_7F: PrefixSelect = PrefixSelect { none: ___, p66: Op::W(&E1_7F_W), pf3: ___, pf2: ___ };

pub(crate) static MAP1: [Op; 256] = {
    let mut map = [___; 256];
    map[0x10] = Op::Pfx(&E1_10);
    map[0x11] = Op::Pfx(&E1_11);
    map[0x58] = Op::Pfx(&E1_58);
    map[0x5c] = Op::Pfx(&E1_5C);
    map[0x6f] = Op::Pfx(&E1_6F);
    map[0x7f] = Op::Pfx(&E1_7F);
    map
};

// Map 2: gathers. EVEX gathers mask through a k register rather than a
// vector operand.

static VPGATHERDD: InstDef = avx512(Mn::VPGATHERDD, &[xreg(X, Write), od(OpSpec::RmMemVsib(VsibIndex::D), D, Read)]).cpuid(&cpuid::AVX512F).elem(4);
static VPGATHERDQ: InstDef = avx512(Mn::VPGATHERDQ, &[xreg(X, Write), od(OpSpec::RmMemVsib(VsibIndex::D), Q, Read)]).cpuid(&cpuid::AVX512F).elem(8);

static E2_90_W: WSelect = WSelect { w0: Op::Inst(&VPGATHERDD), w1: Op::Inst(&VPGATHERDQ) };
static E2_90: PrefixSelect = PrefixSelect { none: ___, p66: Op::W(&E2_90_W), pf3: ___, pf2: ___ };

pub(crate) static MAP2: [Op; 256] = {
    let mut map = [___; 256];
    map[0x90] = Op::Pfx(&E2_90);
    map
};

// Map 3: nothing from this instruction database yet.

pub(crate) static MAP3: [Op; 256] = [___; 256];
