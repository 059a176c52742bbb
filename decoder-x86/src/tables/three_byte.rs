//! Three-byte (0F38/0F3A) opcode maps.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::{fixed, imm, mem, od, reg, rm, xreg, xrm, InstDef, OpSpec, OpcodeSlot as Op, PrefixSelect, Sz::*};
use crate::flags::effect as f;
use crate::flags::{Flag, FlagAccess};
use crate::meta::{cpuid, Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

const ___: Op = Op::None;

// 0F38 00: PSHUFB.

static PSHUFB_P_Q: InstDef = InstDef::new(Mn::PSHUFB, &[od(OpSpec::RegMm, Q, ReadWrite), od(OpSpec::RmMm, Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Ssse3).cpuid(&cpuid::SSSE3);
static PSHUFB_V_W: InstDef = InstDef::new(Mn::PSHUFB, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Ssse3).cpuid(&cpuid::SSSE3);
static PS38_00: PrefixSelect = PrefixSelect { none: Op::Inst(&PSHUFB_P_Q), p66: Op::Inst(&PSHUFB_V_W), pf3: ___, pf2: ___ };

// 0F38 17: PTEST writes ZF/CF only.

static PTEST_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::Of, FlagAccess::Cleared),
    (Flag::Sf, FlagAccess::Cleared),
    (Flag::Zf, FlagAccess::Modified),
    (Flag::Af, FlagAccess::Cleared),
    (Flag::Pf, FlagAccess::Cleared),
    (Flag::Cf, FlagAccess::Modified),
];

static PTEST: InstDef = InstDef::new(Mn::PTEST, &[xreg(X, Read), xrm(X, Read)], PTEST_EFFECTS, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);
static PS38_17: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PTEST), pf3: ___, pf2: ___ };

// 0F38 F0/F1: MOVBE and CRC32 share slots, split by mandatory prefix.

static MOVBE_GV_M: InstDef = InstDef::new(Mn::MOVBE, &[reg(V, Write), mem(V, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::Movbe).cpuid(&cpuid::MOVBE);
static MOVBE_M_GV: InstDef = InstDef::new(Mn::MOVBE, &[mem(V, Write), reg(V, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::Movbe).cpuid(&cpuid::MOVBE);
static CRC32_GY_EB: InstDef = InstDef::new(Mn::CRC32, &[reg(V, ReadWrite), rm(B, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse42).cpuid(&cpuid::SSE42);
static CRC32_GY_EV: InstDef = InstDef::new(Mn::CRC32, &[reg(V, ReadWrite), rm(V, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse42).cpuid(&cpuid::SSE42);

// A 66 prefix keeps its operand-size meaning on MOVBE, so the 66 slots
// stay empty and selection falls back to the no-prefix definition.
static PS38_F0: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVBE_GV_M), p66: ___, pf3: ___, pf2: Op::Inst(&CRC32_GY_EB) };
static PS38_F1: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVBE_M_GV), p66: ___, pf3: ___, pf2: Op::Inst(&CRC32_GY_EV) };

// 0F38 F6: ADCX/ADOX.

static ADCX: InstDef = InstDef::new(Mn::ADCX, &[reg(V, ReadWrite), rm(V, Read)], f::ADCX, M::ANY, PS::NONE, C::Arith, S::Adx).cpuid(&cpuid::ADX);
static ADOX: InstDef = InstDef::new(Mn::ADOX, &[reg(V, ReadWrite), rm(V, Read)], f::ADOX, M::ANY, PS::NONE, C::Arith, S::Adx).cpuid(&cpuid::ADX);
static PS38_F6: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&ADCX), pf3: Op::Inst(&ADOX), pf2: ___ };

#[rustfmt::skip]
pub(crate) static MAP_0F38: [Op; 256] = {
    let mut map = [___; 256];
    map[0x00] = Op::Pfx(&PS38_00);
    map[0x17] = Op::Pfx(&PS38_17);
    map[0xf0] = Op::Pfx(&PS38_F0);
    map[0xf1] = Op::Pfx(&PS38_F1);
    map[0xf6] = Op::Pfx(&PS38_F6);
    map
};

// 0F3A 0F: PALIGNR.

static PALIGNR_P_Q: InstDef = InstDef::new(Mn::PALIGNR, &[od(OpSpec::RegMm, Q, ReadWrite), od(OpSpec::RmMm, Q, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Ssse3).cpuid(&cpuid::SSSE3);
static PALIGNR_V_W: InstDef = InstDef::new(Mn::PALIGNR, &[xreg(X, ReadWrite), xrm(X, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Ssse3).cpuid(&cpuid::SSSE3);
static PS3A_0F: PrefixSelect = PrefixSelect { none: Op::Inst(&PALIGNR_P_Q), p66: Op::Inst(&PALIGNR_V_W), pf3: ___, pf2: ___ };

// 0F3A 14-16, 20-22: lane extract/insert.

static PEXTRB: InstDef = InstDef::new(Mn::PEXTRB, &[rm(B, Write), xreg(DQ, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);
static PEXTRW: InstDef = InstDef::new(Mn::PEXTRW, &[rm(W, Write), xreg(DQ, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);
static PEXTRD: InstDef = InstDef::new(Mn::PEXTRD, &[rm(V, Write), xreg(DQ, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);
static PINSRB: InstDef = InstDef::new(Mn::PINSRB, &[xreg(DQ, ReadWrite), rm(B, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);
static PINSRW: InstDef = InstDef::new(Mn::PINSRW, &[xreg(DQ, ReadWrite), rm(W, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);
static PINSRD: InstDef = InstDef::new(Mn::PINSRD, &[xreg(DQ, ReadWrite), rm(V, Read), imm(B)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse41).cpuid(&cpuid::SSE41);

static PS3A_14: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PEXTRB), pf3: ___, pf2: ___ };
static PS3A_15: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PEXTRW), pf3: ___, pf2: ___ };
static PS3A_16: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PEXTRD), pf3: ___, pf2: ___ };
static PS3A_20: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PINSRB), pf3: ___, pf2: ___ };
static PS3A_21: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PINSRW), pf3: ___, pf2: ___ };
static PS3A_22: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PINSRD), pf3: ___, pf2: ___ };

// 0F3A 63: PCMPISTRI reports through the flags and ECX.

static PCMPISTRI_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::Of, FlagAccess::Modified),
    (Flag::Sf, FlagAccess::Modified),
    (Flag::Zf, FlagAccess::Modified),
    (Flag::Af, FlagAccess::Cleared),
    (Flag::Pf, FlagAccess::Cleared),
    (Flag::Cf, FlagAccess::Modified),
];

static PCMPISTRI: InstDef = InstDef::new(Mn::PCMPISTRI, &[xreg(DQ, Read), xrm(DQ, Read), imm(B)], PCMPISTRI_EFFECTS, M::ANY, PS::NONE, C::Sse, S::Sse42)
    .implicit(&[fixed(1, D, Write)])
    .cpuid(&cpuid::SSE42);
static PS3A_63: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&PCMPISTRI), pf3: ___, pf2: ___ };

#[rustfmt::skip]
pub(crate) static MAP_0F3A: [Op; 256] = {
    let mut map = [___; 256];
    map[0x0f] = Op::Pfx(&PS3A_0F);
    map[0x14] = Op::Pfx(&PS3A_14);
    map[0x15] = Op::Pfx(&PS3A_15);
    map[0x16] = Op::Pfx(&PS3A_16);
    map[0x20] = Op::Pfx(&PS3A_20);
    map[0x21] = Op::Pfx(&PS3A_21);
    map[0x22] = Op::Pfx(&PS3A_22);
    map[0x63] = Op::Pfx(&PS3A_63);
    map
};
