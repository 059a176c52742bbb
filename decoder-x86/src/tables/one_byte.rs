//! One-byte opcode map.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::groups::{
    AL_IB, AL_IB_R, AX_IZ, AX_IZ_R, DI_RW, EB_GB, EB_GB_R, EB_GB_W, EB_GB_X, EV_GV, EV_GV_R,
    EV_GV_W, EV_GV_X, GB_EB, GB_EB_R, GB_EB_W, GRP11_C6, GRP11_C7, GRP1A_8F, GRP1_80, GRP1_81,
    GRP1_83, GRP2_C0, GRP2_C1, GRP2_D0, GRP2_D1, GRP2_D2, GRP2_D3, GRP3_F6, GRP3_F7, GRP4_FE,
    GRP5_FF, GV_EV, GV_EV_R, GV_EV_W, POP_IMPLICIT, PUSH_IMPLICIT, SI_RW,
};
use super::x87;
use super::{
    fixed, imm, imms, mem, od, opreg, reg, rel, rm, stack, AszSelect, Escape, InstDef, ModeSelect,
    OpSpec, OpcodeSlot as Op, OperandDef, OszSelect, PrefixSelect, Sz::*,
};
use crate::flags::effect as f;
use crate::flags::Flag;
use crate::flags::FlagAccess;
use crate::meta::{Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

const ___: Op = Op::None;
const PFX: Op = Op::Prefix;

// 00-3F: the classic binary-op block.

static ADD_EB_GB: InstDef = InstDef::new(Mn::ADD, &EB_GB, f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static ADD_EV_GV: InstDef = InstDef::new(Mn::ADD, &EV_GV, f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static ADD_GB_EB: InstDef = InstDef::new(Mn::ADD, &GB_EB, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static ADD_GV_EV: InstDef = InstDef::new(Mn::ADD, &GV_EV, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static ADD_AL_IB: InstDef = InstDef::new(Mn::ADD, &AL_IB, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static ADD_AX_IZ: InstDef = InstDef::new(Mn::ADD, &AX_IZ, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);

static OR_EB_GB: InstDef = InstDef::new(Mn::OR, &EB_GB, f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static OR_EV_GV: InstDef = InstDef::new(Mn::OR, &EV_GV, f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static OR_GB_EB: InstDef = InstDef::new(Mn::OR, &GB_EB, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static OR_GV_EV: InstDef = InstDef::new(Mn::OR, &GV_EV, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static OR_AL_IB: InstDef = InstDef::new(Mn::OR, &AL_IB, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static OR_AX_IZ: InstDef = InstDef::new(Mn::OR, &AX_IZ, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);

static ADC_EB_GB: InstDef = InstDef::new(Mn::ADC, &EB_GB, f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static ADC_EV_GV: InstDef = InstDef::new(Mn::ADC, &EV_GV, f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static ADC_GB_EB: InstDef = InstDef::new(Mn::ADC, &GB_EB, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);
static ADC_GV_EV: InstDef = InstDef::new(Mn::ADC, &GV_EV, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);
static ADC_AL_IB: InstDef = InstDef::new(Mn::ADC, &AL_IB, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);
static ADC_AX_IZ: InstDef = InstDef::new(Mn::ADC, &AX_IZ, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);

static SBB_EB_GB: InstDef = InstDef::new(Mn::SBB, &EB_GB, f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SBB_EV_GV: InstDef = InstDef::new(Mn::SBB, &EV_GV, f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SBB_GB_EB: InstDef = InstDef::new(Mn::SBB, &GB_EB, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);
static SBB_GV_EV: InstDef = InstDef::new(Mn::SBB, &GV_EV, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);
static SBB_AL_IB: InstDef = InstDef::new(Mn::SBB, &AL_IB, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);
static SBB_AX_IZ: InstDef = InstDef::new(Mn::SBB, &AX_IZ, f::ARITH_CARRY, M::ANY, PS::NONE, C::Arith, S::I86);

static AND_EB_GB: InstDef = InstDef::new(Mn::AND, &EB_GB, f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static AND_EV_GV: InstDef = InstDef::new(Mn::AND, &EV_GV, f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static AND_GB_EB: InstDef = InstDef::new(Mn::AND, &GB_EB, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static AND_GV_EV: InstDef = InstDef::new(Mn::AND, &GV_EV, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static AND_AL_IB: InstDef = InstDef::new(Mn::AND, &AL_IB, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static AND_AX_IZ: InstDef = InstDef::new(Mn::AND, &AX_IZ, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);

static SUB_EB_GB: InstDef = InstDef::new(Mn::SUB, &EB_GB, f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SUB_EV_GV: InstDef = InstDef::new(Mn::SUB, &EV_GV, f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SUB_GB_EB: InstDef = InstDef::new(Mn::SUB, &GB_EB, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static SUB_GV_EV: InstDef = InstDef::new(Mn::SUB, &GV_EV, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static SUB_AL_IB: InstDef = InstDef::new(Mn::SUB, &AL_IB, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static SUB_AX_IZ: InstDef = InstDef::new(Mn::SUB, &AX_IZ, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);

static XOR_EB_GB: InstDef = InstDef::new(Mn::XOR, &EB_GB, f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static XOR_EV_GV: InstDef = InstDef::new(Mn::XOR, &EV_GV, f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static XOR_GB_EB: InstDef = InstDef::new(Mn::XOR, &GB_EB, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static XOR_GV_EV: InstDef = InstDef::new(Mn::XOR, &GV_EV, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static XOR_AL_IB: InstDef = InstDef::new(Mn::XOR, &AL_IB, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static XOR_AX_IZ: InstDef = InstDef::new(Mn::XOR, &AX_IZ, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);

static CMP_EB_GB: InstDef = InstDef::new(Mn::CMP, &EB_GB_R, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static CMP_EV_GV: InstDef = InstDef::new(Mn::CMP, &EV_GV_R, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static CMP_GB_EB: InstDef = InstDef::new(Mn::CMP, &GB_EB_R, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static CMP_GV_EV: InstDef = InstDef::new(Mn::CMP, &GV_EV_R, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static CMP_AL_IB: InstDef = InstDef::new(Mn::CMP, &AL_IB_R, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);
static CMP_AX_IZ: InstDef = InstDef::new(Mn::CMP, &AX_IZ_R, f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);

// Legacy segment pushes/pops and the decimal-adjust block, all reclaimed
// by 64-bit mode.

static PUSH_ES: InstDef = InstDef::new(Mn::PUSH, &[od(OpSpec::FixedSeg(0), V, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Push, S::I86).implicit(&PUSH_IMPLICIT);
static POP_ES: InstDef = InstDef::new(Mn::POP, &[od(OpSpec::FixedSeg(0), V, Write)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Pop, S::I86).implicit(&POP_IMPLICIT);
static PUSH_CS: InstDef = InstDef::new(Mn::PUSH, &[od(OpSpec::FixedSeg(1), V, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Push, S::I86).implicit(&PUSH_IMPLICIT);
static PUSH_SS: InstDef = InstDef::new(Mn::PUSH, &[od(OpSpec::FixedSeg(2), V, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Push, S::I86).implicit(&PUSH_IMPLICIT);
static POP_SS: InstDef = InstDef::new(Mn::POP, &[od(OpSpec::FixedSeg(2), V, Write)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Pop, S::I86).implicit(&POP_IMPLICIT);
static PUSH_DS: InstDef = InstDef::new(Mn::PUSH, &[od(OpSpec::FixedSeg(3), V, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Push, S::I86).implicit(&PUSH_IMPLICIT);
static POP_DS: InstDef = InstDef::new(Mn::POP, &[od(OpSpec::FixedSeg(3), V, Write)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Pop, S::I86).implicit(&POP_IMPLICIT);

static DAA: InstDef = InstDef::new(Mn::DAA, &[], f::DECIMAL, M::LEGACY_ONLY, PS::NONE, C::Decimal, S::I86).implicit(&[fixed(0, B, ReadWrite)]);
static DAS: InstDef = InstDef::new(Mn::DAS, &[], f::DECIMAL, M::LEGACY_ONLY, PS::NONE, C::Decimal, S::I86).implicit(&[fixed(0, B, ReadWrite)]);
static AAA: InstDef = InstDef::new(Mn::AAA, &[], f::DECIMAL, M::LEGACY_ONLY, PS::NONE, C::Decimal, S::I86).implicit(&[fixed(0, W, ReadWrite)]);
static AAS: InstDef = InstDef::new(Mn::AAS, &[], f::DECIMAL, M::LEGACY_ONLY, PS::NONE, C::Decimal, S::I86).implicit(&[fixed(0, W, ReadWrite)]);

static X06: ModeSelect = ModeSelect { legacy: Op::Inst(&PUSH_ES), long: ___ };
static X07: ModeSelect = ModeSelect { legacy: Op::Inst(&POP_ES), long: ___ };
static X0E: ModeSelect = ModeSelect { legacy: Op::Inst(&PUSH_CS), long: ___ };
static X16: ModeSelect = ModeSelect { legacy: Op::Inst(&PUSH_SS), long: ___ };
static X17: ModeSelect = ModeSelect { legacy: Op::Inst(&POP_SS), long: ___ };
static X1E: ModeSelect = ModeSelect { legacy: Op::Inst(&PUSH_DS), long: ___ };
static X1F: ModeSelect = ModeSelect { legacy: Op::Inst(&POP_DS), long: ___ };
static X27: ModeSelect = ModeSelect { legacy: Op::Inst(&DAA), long: ___ };
static X2F: ModeSelect = ModeSelect { legacy: Op::Inst(&DAS), long: ___ };
static X37: ModeSelect = ModeSelect { legacy: Op::Inst(&AAA), long: ___ };
static X3F: ModeSelect = ModeSelect { legacy: Op::Inst(&AAS), long: ___ };

// 40-4F: INC/DEC in legacy modes; REX space in 64-bit mode, which the
// prefix scanner owns before the tables are consulted.

static INC_ZV: InstDef = InstDef::new(Mn::INC, &[opreg(V, ReadWrite)], f::INC_DEC, M::LEGACY_ONLY, PS::NONE, C::Arith, S::I86);
static DEC_ZV: InstDef = InstDef::new(Mn::DEC, &[opreg(V, ReadWrite)], f::INC_DEC, M::LEGACY_ONLY, PS::NONE, C::Arith, S::I86);

static X40: ModeSelect = ModeSelect { legacy: Op::Inst(&INC_ZV), long: PFX };
static X48: ModeSelect = ModeSelect { legacy: Op::Inst(&DEC_ZV), long: PFX };

// 50-63.

static PUSH_ZV: InstDef = InstDef::new(Mn::PUSH, &[opreg(VQ, Read)], f::NONE, M::ANY, PS::NONE, C::Push, S::I86).implicit(&PUSH_IMPLICIT);
static POP_ZV: InstDef = InstDef::new(Mn::POP, &[opreg(VQ, Write)], f::NONE, M::ANY, PS::NONE, C::Pop, S::I86).implicit(&POP_IMPLICIT);

static PUSHA: InstDef = InstDef::new(Mn::PUSHA, &[], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Push, S::I186)
    .implicit(&[od(OpSpec::GpBlock, V, Read), super::RSP_RW, stack(Write)]);
static POPA: InstDef = InstDef::new(Mn::POPA, &[], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Pop, S::I186)
    .implicit(&[od(OpSpec::GpBlock, V, Write), super::RSP_RW, stack(Read)]);
static BOUND: InstDef = InstDef::new(Mn::BOUND, &[reg(V, Read), mem(A, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Misc, S::I186);
static ARPL: InstDef = InstDef::new(Mn::ARPL, &[rm(W, ReadWrite), reg(W, Read)], f::ARPL, M::PROT, PS::NONE, C::System, S::I286);
static MOVSXD: InstDef = InstDef::new(Mn::MOVSXD, &[reg(V, Write), rm(D, Read)], f::NONE, M::LONG_ONLY, PS::NONE, C::Widen, S::LongMode);

static X60: ModeSelect = ModeSelect { legacy: Op::Inst(&PUSHA), long: ___ };
static X61: ModeSelect = ModeSelect { legacy: Op::Inst(&POPA), long: ___ };
static X62: ModeSelect = ModeSelect { legacy: Op::Inst(&BOUND), long: ___ };
static X63: ModeSelect = ModeSelect { legacy: Op::Inst(&ARPL), long: Op::Inst(&MOVSXD) };

// 68-6F.

static PUSH_IZ: InstDef = InstDef::new(Mn::PUSH, &[imms(Z)], f::NONE, M::ANY, PS::NONE, C::Push, S::I186).implicit(&PUSH_IMPLICIT);
static PUSH_IB: InstDef = InstDef::new(Mn::PUSH, &[imms(B)], f::NONE, M::ANY, PS::NONE, C::Push, S::I186).implicit(&PUSH_IMPLICIT);
static IMUL_GV_EV_IZ: InstDef = InstDef::new(Mn::IMUL, &[reg(V, Write), rm(V, Read), imms(Z)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I186);
static IMUL_GV_EV_IB: InstDef = InstDef::new(Mn::IMUL, &[reg(V, Write), rm(V, Read), imms(B)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I186);

static INS_B: InstDef = InstDef::new(Mn::INS, &[od(OpSpec::MemDi, B, Write), fixed(2, W, Read)], f::STRING, M::ANY, PS::REP, C::Io, S::I186).implicit(&[DI_RW]);
static INS_V: InstDef = InstDef::new(Mn::INS, &[od(OpSpec::MemDi, Z, Write), fixed(2, W, Read)], f::STRING, M::ANY, PS::REP, C::Io, S::I186).implicit(&[DI_RW]);
static OUTS_B: InstDef = InstDef::new(Mn::OUTS, &[fixed(2, W, Read), od(OpSpec::MemSi, B, Read)], f::STRING, M::ANY, PS::REP, C::Io, S::I186).implicit(&[SI_RW]);
static OUTS_V: InstDef = InstDef::new(Mn::OUTS, &[fixed(2, W, Read), od(OpSpec::MemSi, Z, Read)], f::STRING, M::ANY, PS::REP, C::Io, S::I186).implicit(&[SI_RW]);

// 70-7F: short conditional branches.

static JO_JB: InstDef = InstDef::new(Mn::JO, &[rel(B)], f::COND_O, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JNO_JB: InstDef = InstDef::new(Mn::JNO, &[rel(B)], f::COND_O, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JB_JB: InstDef = InstDef::new(Mn::JB, &[rel(B)], f::COND_B, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JNB_JB: InstDef = InstDef::new(Mn::JNB, &[rel(B)], f::COND_B, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JZ_JB: InstDef = InstDef::new(Mn::JZ, &[rel(B)], f::COND_Z, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JNZ_JB: InstDef = InstDef::new(Mn::JNZ, &[rel(B)], f::COND_Z, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JNA_JB: InstDef = InstDef::new(Mn::JNA, &[rel(B)], f::COND_BE, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JA_JB: InstDef = InstDef::new(Mn::JA, &[rel(B)], f::COND_BE, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JS_JB: InstDef = InstDef::new(Mn::JS, &[rel(B)], f::COND_S, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JNS_JB: InstDef = InstDef::new(Mn::JNS, &[rel(B)], f::COND_S, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JP_JB: InstDef = InstDef::new(Mn::JP, &[rel(B)], f::COND_P, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JNP_JB: InstDef = InstDef::new(Mn::JNP, &[rel(B)], f::COND_P, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JL_JB: InstDef = InstDef::new(Mn::JL, &[rel(B)], f::COND_L, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JGE_JB: InstDef = InstDef::new(Mn::JGE, &[rel(B)], f::COND_L, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JLE_JB: InstDef = InstDef::new(Mn::JLE, &[rel(B)], f::COND_LE, M::ANY, PS::BRANCH, C::Jump, S::I86);
static JG_JB: InstDef = InstDef::new(Mn::JG, &[rel(B)], f::COND_LE, M::ANY, PS::BRANCH, C::Jump, S::I86);

// 84-8F.

static TEST_EB_GB: InstDef = InstDef::new(Mn::TEST, &EB_GB_R, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static TEST_EV_GV: InstDef = InstDef::new(Mn::TEST, &EV_GV_R, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static XCHG_EB_GB: InstDef = InstDef::new(Mn::XCHG, &EB_GB_X, f::NONE, M::ANY, PS::LOCKABLE, C::Semaphore, S::I86);
static XCHG_EV_GV: InstDef = InstDef::new(Mn::XCHG, &EV_GV_X, f::NONE, M::ANY, PS::LOCKABLE, C::Semaphore, S::I86);
static MOV_EB_GB: InstDef = InstDef::new(Mn::MOV, &EB_GB_W, f::NONE, M::ANY, PS::XRELEASE, C::DataTransfer, S::I86);
static MOV_EV_GV: InstDef = InstDef::new(Mn::MOV, &EV_GV_W, f::NONE, M::ANY, PS::XRELEASE, C::DataTransfer, S::I86);
static MOV_GB_EB: InstDef = InstDef::new(Mn::MOV, &GB_EB_W, f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_GV_EV: InstDef = InstDef::new(Mn::MOV, &GV_EV_W, f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_EW_SW: InstDef = InstDef::new(Mn::MOV, &[rm(W, Write), od(OpSpec::RegSeg, W, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static LEA: InstDef = InstDef::new(Mn::LEA, &[reg(V, Write), mem(M0, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_SW_EW: InstDef = InstDef::new(Mn::MOV, &[od(OpSpec::RegSeg, W, Write), rm(W, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);

// 90-9F.

static NOP: InstDef = InstDef::new(Mn::NOP, &[], f::NONE, M::ANY, PS::NONE, C::Nop, S::I86);
static PAUSE: InstDef = InstDef::new(Mn::PAUSE, &[], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse2);
static PS_90: PrefixSelect = PrefixSelect { none: Op::Inst(&NOP), p66: ___, pf3: Op::Inst(&PAUSE), pf2: ___ };

static XCHG_ZV_AX: InstDef = InstDef::new(Mn::XCHG, &[opreg(V, ReadWrite), fixed(0, V, ReadWrite)], f::NONE, M::ANY, PS::NONE, C::Semaphore, S::I86);

static CBW: InstDef = InstDef::new(Mn::CBW, &[], f::NONE, M::ANY, PS::NONE, C::Convert, S::I86).implicit(&[fixed(0, V, ReadWrite)]);
static CWDE: InstDef = InstDef::new(Mn::CWDE, &[], f::NONE, M::ANY, PS::NONE, C::Convert, S::I386).implicit(&[fixed(0, V, ReadWrite)]);
static CDQE: InstDef = InstDef::new(Mn::CDQE, &[], f::NONE, M::LONG_ONLY, PS::NONE, C::Convert, S::LongMode).implicit(&[fixed(0, V, ReadWrite)]);
static OS_98: OszSelect = OszSelect { o16: Op::Inst(&CBW), o32: Op::Inst(&CWDE), o64: Op::Inst(&CDQE) };

static CWD: InstDef = InstDef::new(Mn::CWD, &[], f::NONE, M::ANY, PS::NONE, C::Convert, S::I86).implicit(&[fixed(2, V, Write), fixed(0, V, Read)]);
static CDQ: InstDef = InstDef::new(Mn::CDQ, &[], f::NONE, M::ANY, PS::NONE, C::Convert, S::I386).implicit(&[fixed(2, V, Write), fixed(0, V, Read)]);
static CQO: InstDef = InstDef::new(Mn::CQO, &[], f::NONE, M::LONG_ONLY, PS::NONE, C::Convert, S::LongMode).implicit(&[fixed(2, V, Write), fixed(0, V, Read)]);
static OS_99: OszSelect = OszSelect { o16: Op::Inst(&CWD), o32: Op::Inst(&CDQ), o64: Op::Inst(&CQO) };

static CALLF_AP: InstDef = InstDef::new(Mn::CALLF, &[od(OpSpec::FarImm, P, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Call, S::I86).implicit(&PUSH_IMPLICIT);
static X9A: ModeSelect = ModeSelect { legacy: Op::Inst(&CALLF_AP), long: ___ };

static FWAIT: InstDef = InstDef::new(Mn::WAIT, &[], f::NONE, M::ANY, PS::NONE, C::X87, S::I86);

static PUSHF: InstDef = InstDef::new(Mn::PUSHF, &[], f::READ_ALL, M::ANY, PS::NONE, C::Push, S::I86)
    .implicit(&[od(OpSpec::FlagsReg, VQ, Read), super::RSP_RW, stack(Write)]);
static POPF: InstDef = InstDef::new(Mn::POPF, &[], f::WRITE_ALL, M::ANY, PS::NONE, C::Pop, S::I86)
    .implicit(&[od(OpSpec::FlagsReg, VQ, Write), super::RSP_RW, stack(Read)]);
static SAHF: InstDef = InstDef::new(Mn::SAHF, &[], f::SAHF, M::ANY, PS::NONE, C::FlagOp, S::I86).implicit(&[fixed(4, B, Read)]);
static LAHF: InstDef = InstDef::new(Mn::LAHF, &[], f::LAHF, M::ANY, PS::NONE, C::FlagOp, S::I86).implicit(&[fixed(4, B, Write)]);

// A0-AF: moffs moves and string ops.

static MOV_AL_OB: InstDef = InstDef::new(Mn::MOV, &[fixed(0, B, Write), od(OpSpec::Moffs, B, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_AX_OV: InstDef = InstDef::new(Mn::MOV, &[fixed(0, V, Write), od(OpSpec::Moffs, V, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_OB_AL: InstDef = InstDef::new(Mn::MOV, &[od(OpSpec::Moffs, B, Write), fixed(0, B, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_OV_AX: InstDef = InstDef::new(Mn::MOV, &[od(OpSpec::Moffs, V, Write), fixed(0, V, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);

static MOVS_B: InstDef = InstDef::new(Mn::MOVS, &[od(OpSpec::MemDi, B, Write), od(OpSpec::MemSi, B, Read)], f::STRING, M::ANY, PS::REP, C::StringOp, S::I86).implicit(&[SI_RW, DI_RW]);
static MOVS_V: InstDef = InstDef::new(Mn::MOVS, &[od(OpSpec::MemDi, V, Write), od(OpSpec::MemSi, V, Read)], f::STRING, M::ANY, PS::REP, C::StringOp, S::I86).implicit(&[SI_RW, DI_RW]);
static CMPS_B: InstDef = InstDef::new(Mn::CMPS, &[od(OpSpec::MemSi, B, Read), od(OpSpec::MemDi, B, Read)], f::STRING_COMPARE, M::ANY, PS::REP_ANY, C::StringOp, S::I86).implicit(&[SI_RW, DI_RW]);
static CMPS_V: InstDef = InstDef::new(Mn::CMPS, &[od(OpSpec::MemSi, V, Read), od(OpSpec::MemDi, V, Read)], f::STRING_COMPARE, M::ANY, PS::REP_ANY, C::StringOp, S::I86).implicit(&[SI_RW, DI_RW]);
static TEST_AL_IB: InstDef = InstDef::new(Mn::TEST, &AL_IB_R, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static TEST_AX_IZ: InstDef = InstDef::new(Mn::TEST, &AX_IZ_R, f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static STOS_B: InstDef = InstDef::new(Mn::STOS, &[od(OpSpec::MemDi, B, Write), fixed(0, B, Read)], f::STRING, M::ANY, PS::REP, C::StringOp, S::I86).implicit(&[DI_RW]);
static STOS_V: InstDef = InstDef::new(Mn::STOS, &[od(OpSpec::MemDi, V, Write), fixed(0, V, Read)], f::STRING, M::ANY, PS::REP, C::StringOp, S::I86).implicit(&[DI_RW]);
static LODS_B: InstDef = InstDef::new(Mn::LODS, &[fixed(0, B, Write), od(OpSpec::MemSi, B, Read)], f::STRING, M::ANY, PS::REP, C::StringOp, S::I86).implicit(&[SI_RW]);
static LODS_V: InstDef = InstDef::new(Mn::LODS, &[fixed(0, V, Write), od(OpSpec::MemSi, V, Read)], f::STRING, M::ANY, PS::REP, C::StringOp, S::I86).implicit(&[SI_RW]);
static SCAS_B: InstDef = InstDef::new(Mn::SCAS, &[fixed(0, B, Read), od(OpSpec::MemDi, B, Read)], f::STRING_COMPARE, M::ANY, PS::REP_ANY, C::StringOp, S::I86).implicit(&[DI_RW]);
static SCAS_V: InstDef = InstDef::new(Mn::SCAS, &[fixed(0, V, Read), od(OpSpec::MemDi, V, Read)], f::STRING_COMPARE, M::ANY, PS::REP_ANY, C::StringOp, S::I86).implicit(&[DI_RW]);

// B0-BF: immediate register loads.

static MOV_ZB_IB: InstDef = InstDef::new(Mn::MOV, &[opreg(B, Write), imm(B)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);
static MOV_ZV_IV: InstDef = InstDef::new(Mn::MOV, &[opreg(V, Write), imm(V)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I86);

// C0-CF.

static RET_IW: InstDef = InstDef::new(Mn::RETURN, &[imm(W)], f::NONE, M::ANY, PS::BND, C::Ret, S::I86).implicit(&POP_IMPLICIT);
static RET: InstDef = InstDef::new(Mn::RETURN, &[], f::NONE, M::ANY, PS::BND, C::Ret, S::I86).implicit(&POP_IMPLICIT);
static LES: InstDef = InstDef::new(Mn::LES, &[reg(V, Write), mem(P, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::DataTransfer, S::I86)
    .implicit(&[od(OpSpec::FixedSeg(0), W, Write)]);
static LDS: InstDef = InstDef::new(Mn::LDS, &[reg(V, Write), mem(P, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::DataTransfer, S::I86)
    .implicit(&[od(OpSpec::FixedSeg(3), W, Write)]);
static XC4: ModeSelect = ModeSelect { legacy: Op::Inst(&LES), long: ___ };
static XC5: ModeSelect = ModeSelect { legacy: Op::Inst(&LDS), long: ___ };

static ENTER: InstDef = InstDef::new(Mn::ENTER, &[imm(W), imm(B)], f::NONE, M::ANY, PS::NONE, C::Push, S::I186)
    .implicit(&[fixed(5, VQ, ReadWrite), super::RSP_RW, stack(Write)]);
static LEAVE: InstDef = InstDef::new(Mn::LEAVE, &[], f::NONE, M::ANY, PS::NONE, C::Pop, S::I186)
    .implicit(&[fixed(5, VQ, ReadWrite), super::RSP_RW, stack(Read)]);
static RETF_IW: InstDef = InstDef::new(Mn::RETF, &[imm(W)], f::NONE, M::ANY, PS::NONE, C::Ret, S::I86).implicit(&POP_IMPLICIT);
static RETF: InstDef = InstDef::new(Mn::RETF, &[], f::NONE, M::ANY, PS::NONE, C::Ret, S::I86).implicit(&POP_IMPLICIT);

static INT_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::Tf, FlagAccess::Cleared),
    (Flag::Rf, FlagAccess::Cleared),
    (Flag::If, FlagAccess::Modified),
];

static INT3: InstDef = InstDef::new(Mn::INT3, &[], INT_EFFECTS, M::ANY, PS::NONE, C::Interrupt, S::I86);
static INT_IB: InstDef = InstDef::new(Mn::INT, &[imm(B)], INT_EFFECTS, M::ANY, PS::NONE, C::Interrupt, S::I86);
static INTO: InstDef = InstDef::new(Mn::INTO, &[], &[(Flag::Of, FlagAccess::Tested)], M::LEGACY_ONLY, PS::NONE, C::Interrupt, S::I86);
static XCE: ModeSelect = ModeSelect { legacy: Op::Inst(&INTO), long: ___ };

static IRET: InstDef = InstDef::new(Mn::IRET, &[], f::WRITE_ALL, M::ANY, PS::NONE, C::Ret, S::I86).implicit(&POP_IMPLICIT);
static IRETD: InstDef = InstDef::new(Mn::IRETD, &[], f::WRITE_ALL, M::ANY, PS::NONE, C::Ret, S::I386).implicit(&POP_IMPLICIT);
static IRETQ: InstDef = InstDef::new(Mn::IRETQ, &[], f::WRITE_ALL, M::LONG_ONLY, PS::NONE, C::Ret, S::LongMode).implicit(&POP_IMPLICIT);
static OS_CF: OszSelect = OszSelect { o16: Op::Inst(&IRET), o32: Op::Inst(&IRETD), o64: Op::Inst(&IRETQ) };

// D0-DF.

static AAM_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::Sf, FlagAccess::Modified),
    (Flag::Zf, FlagAccess::Modified),
    (Flag::Pf, FlagAccess::Modified),
    (Flag::Of, FlagAccess::Undefined),
    (Flag::Af, FlagAccess::Undefined),
    (Flag::Cf, FlagAccess::Undefined),
];

static AAM: InstDef = InstDef::new(Mn::AAM, &[imm(B)], AAM_EFFECTS, M::LEGACY_ONLY, PS::NONE, C::Decimal, S::I86).implicit(&[fixed(0, W, ReadWrite)]);
static AAD: InstDef = InstDef::new(Mn::AAD, &[imm(B)], AAM_EFFECTS, M::LEGACY_ONLY, PS::NONE, C::Decimal, S::I86).implicit(&[fixed(0, W, ReadWrite)]);
static XD4: ModeSelect = ModeSelect { legacy: Op::Inst(&AAM), long: ___ };
static XD5: ModeSelect = ModeSelect { legacy: Op::Inst(&AAD), long: ___ };

static XLAT: InstDef = InstDef::new(Mn::XLAT, &[], f::NONE, M::ANY, PS::NONE, C::Misc, S::I86)
    .implicit(&[fixed(0, B, ReadWrite), od(OpSpec::MemXlat, B, Read)]);

// E0-EF.

static CX_LOOP: [OperandDef; 1] = [od(OpSpec::FixedGp(1), AV, ReadWrite)];

static LOOPNZ: InstDef = InstDef::new(Mn::LOOPNZ, &[rel(B)], f::COND_Z, M::ANY, PS::NONE, C::Jump, S::I86).implicit(&CX_LOOP);
static LOOPZ: InstDef = InstDef::new(Mn::LOOPZ, &[rel(B)], f::COND_Z, M::ANY, PS::NONE, C::Jump, S::I86).implicit(&CX_LOOP);
static LOOP: InstDef = InstDef::new(Mn::LOOP, &[rel(B)], f::NONE, M::ANY, PS::NONE, C::Jump, S::I86).implicit(&CX_LOOP);

static JCXZ: InstDef = InstDef::new(Mn::JCXZ, &[rel(B)], f::NONE, M::ANY, PS::NONE, C::Jump, S::I86).implicit(&[od(OpSpec::FixedGp(1), AV, Read)]);
static JECXZ: InstDef = InstDef::new(Mn::JECXZ, &[rel(B)], f::NONE, M::ANY, PS::NONE, C::Jump, S::I386).implicit(&[od(OpSpec::FixedGp(1), AV, Read)]);
static JRCXZ: InstDef = InstDef::new(Mn::JRCXZ, &[rel(B)], f::NONE, M::LONG_ONLY, PS::NONE, C::Jump, S::LongMode).implicit(&[od(OpSpec::FixedGp(1), AV, Read)]);
static AS_E3: AszSelect = AszSelect { a16: Op::Inst(&JCXZ), a32: Op::Inst(&JECXZ), a64: Op::Inst(&JRCXZ) };

static IN_AL_IB: InstDef = InstDef::new(Mn::IN, &[fixed(0, B, Write), imm(B)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);
static IN_AX_IB: InstDef = InstDef::new(Mn::IN, &[fixed(0, Z, Write), imm(B)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);
static OUT_IB_AL: InstDef = InstDef::new(Mn::OUT, &[imm(B), fixed(0, B, Read)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);
static OUT_IB_AX: InstDef = InstDef::new(Mn::OUT, &[imm(B), fixed(0, Z, Read)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);

static CALL_JZ: InstDef = InstDef::new(Mn::CALL, &[rel(Z)], f::NONE, M::ANY, PS::BND, C::Call, S::I86).implicit(&PUSH_IMPLICIT);
static JMP_JZ: InstDef = InstDef::new(Mn::JMP, &[rel(Z)], f::NONE, M::ANY, PS::BND, C::Jump, S::I86);
static JMPF_AP: InstDef = InstDef::new(Mn::JMPF, &[od(OpSpec::FarImm, P, Read)], f::NONE, M::LEGACY_ONLY, PS::NONE, C::Jump, S::I86);
static XEA: ModeSelect = ModeSelect { legacy: Op::Inst(&JMPF_AP), long: ___ };
static JMP_JB: InstDef = InstDef::new(Mn::JMP, &[rel(B)], f::NONE, M::ANY, PS::BND, C::Jump, S::I86);

static IN_AL_DX: InstDef = InstDef::new(Mn::IN, &[fixed(0, B, Write), fixed(2, W, Read)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);
static IN_AX_DX: InstDef = InstDef::new(Mn::IN, &[fixed(0, Z, Write), fixed(2, W, Read)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);
static OUT_DX_AL: InstDef = InstDef::new(Mn::OUT, &[fixed(2, W, Read), fixed(0, B, Read)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);
static OUT_DX_AX: InstDef = InstDef::new(Mn::OUT, &[fixed(2, W, Read), fixed(0, Z, Read)], f::NONE, M::ANY, PS::NONE, C::Io, S::I86);

// F0-FF.

static INT1: InstDef = InstDef::new(Mn::INT1, &[], INT_EFFECTS, M::ANY, PS::NONE, C::Interrupt, S::I86);
static HLT: InstDef = InstDef::new(Mn::HLT, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::I86);
static CMC: InstDef = InstDef::new(Mn::CMC, &[], f::CMC, M::ANY, PS::NONE, C::FlagOp, S::I86);
static CLC: InstDef = InstDef::new(Mn::CLC, &[], f::CLC, M::ANY, PS::NONE, C::FlagOp, S::I86);
static STC: InstDef = InstDef::new(Mn::STC, &[], f::STC, M::ANY, PS::NONE, C::FlagOp, S::I86);
static CLI: InstDef = InstDef::new(Mn::CLI, &[], f::CLI, M::ANY, PS::NONE, C::FlagOp, S::I86);
static STI: InstDef = InstDef::new(Mn::STI, &[], f::STI, M::ANY, PS::NONE, C::FlagOp, S::I86);
static CLD: InstDef = InstDef::new(Mn::CLD, &[], f::CLD, M::ANY, PS::NONE, C::FlagOp, S::I86);
static STD: InstDef = InstDef::new(Mn::STD, &[], f::STD, M::ANY, PS::NONE, C::FlagOp, S::I86);

#[rustfmt::skip]
pub(crate) static MAP: [Op; 256] = [
    // 0x00
    Op::Inst(&ADD_EB_GB), Op::Inst(&ADD_EV_GV), Op::Inst(&ADD_GB_EB), Op::Inst(&ADD_GV_EV),
    Op::Inst(&ADD_AL_IB), Op::Inst(&ADD_AX_IZ), Op::Mode(&X06), Op::Mode(&X07),
    Op::Inst(&OR_EB_GB), Op::Inst(&OR_EV_GV), Op::Inst(&OR_GB_EB), Op::Inst(&OR_GV_EV),
    Op::Inst(&OR_AL_IB), Op::Inst(&OR_AX_IZ), Op::Mode(&X0E), Op::Esc(Escape::Of),
    // 0x10
    Op::Inst(&ADC_EB_GB), Op::Inst(&ADC_EV_GV), Op::Inst(&ADC_GB_EB), Op::Inst(&ADC_GV_EV),
    Op::Inst(&ADC_AL_IB), Op::Inst(&ADC_AX_IZ), Op::Mode(&X16), Op::Mode(&X17),
    Op::Inst(&SBB_EB_GB), Op::Inst(&SBB_EV_GV), Op::Inst(&SBB_GB_EB), Op::Inst(&SBB_GV_EV),
    Op::Inst(&SBB_AL_IB), Op::Inst(&SBB_AX_IZ), Op::Mode(&X1E), Op::Mode(&X1F),
    // 0x20
    Op::Inst(&AND_EB_GB), Op::Inst(&AND_EV_GV), Op::Inst(&AND_GB_EB), Op::Inst(&AND_GV_EV),
    Op::Inst(&AND_AL_IB), Op::Inst(&AND_AX_IZ), PFX, Op::Mode(&X27),
    Op::Inst(&SUB_EB_GB), Op::Inst(&SUB_EV_GV), Op::Inst(&SUB_GB_EB), Op::Inst(&SUB_GV_EV),
    Op::Inst(&SUB_AL_IB), Op::Inst(&SUB_AX_IZ), PFX, Op::Mode(&X2F),
    // 0x30
    Op::Inst(&XOR_EB_GB), Op::Inst(&XOR_EV_GV), Op::Inst(&XOR_GB_EB), Op::Inst(&XOR_GV_EV),
    Op::Inst(&XOR_AL_IB), Op::Inst(&XOR_AX_IZ), PFX, Op::Mode(&X37),
    Op::Inst(&CMP_EB_GB), Op::Inst(&CMP_EV_GV), Op::Inst(&CMP_GB_EB), Op::Inst(&CMP_GV_EV),
    Op::Inst(&CMP_AL_IB), Op::Inst(&CMP_AX_IZ), PFX, Op::Mode(&X3F),
    // 0x40
    Op::Mode(&X40), Op::Mode(&X40), Op::Mode(&X40), Op::Mode(&X40),
    Op::Mode(&X40), Op::Mode(&X40), Op::Mode(&X40), Op::Mode(&X40),
    Op::Mode(&X48), Op::Mode(&X48), Op::Mode(&X48), Op::Mode(&X48),
    Op::Mode(&X48), Op::Mode(&X48), Op::Mode(&X48), Op::Mode(&X48),
    // 0x50
    Op::Inst(&PUSH_ZV), Op::Inst(&PUSH_ZV), Op::Inst(&PUSH_ZV), Op::Inst(&PUSH_ZV),
    Op::Inst(&PUSH_ZV), Op::Inst(&PUSH_ZV), Op::Inst(&PUSH_ZV), Op::Inst(&PUSH_ZV),
    Op::Inst(&POP_ZV), Op::Inst(&POP_ZV), Op::Inst(&POP_ZV), Op::Inst(&POP_ZV),
    Op::Inst(&POP_ZV), Op::Inst(&POP_ZV), Op::Inst(&POP_ZV), Op::Inst(&POP_ZV),
    // 0x60
    Op::Mode(&X60), Op::Mode(&X61), Op::Mode(&X62), Op::Mode(&X63),
    PFX, PFX, PFX, PFX,
    Op::Inst(&PUSH_IZ), Op::Inst(&IMUL_GV_EV_IZ), Op::Inst(&PUSH_IB), Op::Inst(&IMUL_GV_EV_IB),
    Op::Inst(&INS_B), Op::Inst(&INS_V), Op::Inst(&OUTS_B), Op::Inst(&OUTS_V),
    // 0x70
    Op::Inst(&JO_JB), Op::Inst(&JNO_JB), Op::Inst(&JB_JB), Op::Inst(&JNB_JB),
    Op::Inst(&JZ_JB), Op::Inst(&JNZ_JB), Op::Inst(&JNA_JB), Op::Inst(&JA_JB),
    Op::Inst(&JS_JB), Op::Inst(&JNS_JB), Op::Inst(&JP_JB), Op::Inst(&JNP_JB),
    Op::Inst(&JL_JB), Op::Inst(&JGE_JB), Op::Inst(&JLE_JB), Op::Inst(&JG_JB),
    // 0x80
    Op::Grp(&GRP1_80), Op::Grp(&GRP1_81), Op::Mode(&X82), Op::Grp(&GRP1_83),
    Op::Inst(&TEST_EB_GB), Op::Inst(&TEST_EV_GV), Op::Inst(&XCHG_EB_GB), Op::Inst(&XCHG_EV_GV),
    Op::Inst(&MOV_EB_GB), Op::Inst(&MOV_EV_GV), Op::Inst(&MOV_GB_EB), Op::Inst(&MOV_GV_EV),
    Op::Inst(&MOV_EW_SW), Op::Inst(&LEA), Op::Inst(&MOV_SW_EW), Op::Grp(&GRP1A_8F),
    // 0x90
    Op::Pfx(&PS_90), Op::Inst(&XCHG_ZV_AX), Op::Inst(&XCHG_ZV_AX), Op::Inst(&XCHG_ZV_AX),
    Op::Inst(&XCHG_ZV_AX), Op::Inst(&XCHG_ZV_AX), Op::Inst(&XCHG_ZV_AX), Op::Inst(&XCHG_ZV_AX),
    Op::Osz(&OS_98), Op::Osz(&OS_99), Op::Mode(&X9A), Op::Inst(&FWAIT),
    Op::Inst(&PUSHF), Op::Inst(&POPF), Op::Inst(&SAHF), Op::Inst(&LAHF),
    // 0xa0
    Op::Inst(&MOV_AL_OB), Op::Inst(&MOV_AX_OV), Op::Inst(&MOV_OB_AL), Op::Inst(&MOV_OV_AX),
    Op::Inst(&MOVS_B), Op::Inst(&MOVS_V), Op::Inst(&CMPS_B), Op::Inst(&CMPS_V),
    Op::Inst(&TEST_AL_IB), Op::Inst(&TEST_AX_IZ), Op::Inst(&STOS_B), Op::Inst(&STOS_V),
    Op::Inst(&LODS_B), Op::Inst(&LODS_V), Op::Inst(&SCAS_B), Op::Inst(&SCAS_V),
    // 0xb0
    Op::Inst(&MOV_ZB_IB), Op::Inst(&MOV_ZB_IB), Op::Inst(&MOV_ZB_IB), Op::Inst(&MOV_ZB_IB),
    Op::Inst(&MOV_ZB_IB), Op::Inst(&MOV_ZB_IB), Op::Inst(&MOV_ZB_IB), Op::Inst(&MOV_ZB_IB),
    Op::Inst(&MOV_ZV_IV), Op::Inst(&MOV_ZV_IV), Op::Inst(&MOV_ZV_IV), Op::Inst(&MOV_ZV_IV),
    Op::Inst(&MOV_ZV_IV), Op::Inst(&MOV_ZV_IV), Op::Inst(&MOV_ZV_IV), Op::Inst(&MOV_ZV_IV),
    // 0xc0
    Op::Grp(&GRP2_C0), Op::Grp(&GRP2_C1), Op::Inst(&RET_IW), Op::Inst(&RET),
    Op::Mode(&XC4), Op::Mode(&XC5), Op::Grp(&GRP11_C6), Op::Grp(&GRP11_C7),
    Op::Inst(&ENTER), Op::Inst(&LEAVE), Op::Inst(&RETF_IW), Op::Inst(&RETF),
    Op::Inst(&INT3), Op::Inst(&INT_IB), Op::Mode(&XCE), Op::Osz(&OS_CF),
    // 0xd0
    Op::Grp(&GRP2_D0), Op::Grp(&GRP2_D1), Op::Grp(&GRP2_D2), Op::Grp(&GRP2_D3),
    Op::Mode(&XD4), Op::Mode(&XD5), ___, Op::Inst(&XLAT),
    Op::ModSplit(&x87::D8), Op::ModSplit(&x87::D9), Op::ModSplit(&x87::DA), Op::ModSplit(&x87::DB),
    Op::ModSplit(&x87::DC), Op::ModSplit(&x87::DD), Op::ModSplit(&x87::DE), Op::ModSplit(&x87::DF),
    // 0xe0
    Op::Inst(&LOOPNZ), Op::Inst(&LOOPZ), Op::Inst(&LOOP), Op::Asz(&AS_E3),
    Op::Inst(&IN_AL_IB), Op::Inst(&IN_AX_IB), Op::Inst(&OUT_IB_AL), Op::Inst(&OUT_IB_AX),
    Op::Inst(&CALL_JZ), Op::Inst(&JMP_JZ), Op::Mode(&XEA), Op::Inst(&JMP_JB),
    Op::Inst(&IN_AL_DX), Op::Inst(&IN_AX_DX), Op::Inst(&OUT_DX_AL), Op::Inst(&OUT_DX_AX),
    // 0xf0
    PFX, Op::Inst(&INT1), PFX, PFX,
    Op::Inst(&HLT), Op::Inst(&CMC), Op::Grp(&GRP3_F6), Op::Grp(&GRP3_F7),
    Op::Inst(&CLC), Op::Inst(&STC), Op::Inst(&CLI), Op::Inst(&STI),
    Op::Inst(&CLD), Op::Inst(&STD), Op::Grp(&GRP4_FE), Op::Grp(&GRP5_FF),
];

static X82: ModeSelect = ModeSelect { legacy: Op::Grp(&GRP1_80), long: ___ };
