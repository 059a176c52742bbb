//! Shared operand templates, implicit-operand rows and the one-byte-map
//! ModRM.reg groups.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::{
    fixed, imm, imms, mem, od, reg, rm, stack, GroupSelect, InstDef, OpSpec, OpcodeSlot,
    OperandDef, Sz::*, RSP_RW,
};
use crate::flags::effect as f;
use crate::meta::{Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

// Operand rows shared across the binary-op families.

pub(crate) static EB_GB: [OperandDef; 2] = [rm(B, ReadWrite), reg(B, Read)];
pub(crate) static EV_GV: [OperandDef; 2] = [rm(V, ReadWrite), reg(V, Read)];
pub(crate) static GB_EB: [OperandDef; 2] = [reg(B, ReadWrite), rm(B, Read)];
pub(crate) static GV_EV: [OperandDef; 2] = [reg(V, ReadWrite), rm(V, Read)];
pub(crate) static AL_IB: [OperandDef; 2] = [fixed(0, B, ReadWrite), imms(B)];
pub(crate) static AX_IZ: [OperandDef; 2] = [fixed(0, V, ReadWrite), imms(Z)];

// Compare/test rows: nothing is written.
pub(crate) static EB_GB_R: [OperandDef; 2] = [rm(B, Read), reg(B, Read)];
pub(crate) static EV_GV_R: [OperandDef; 2] = [rm(V, Read), reg(V, Read)];
pub(crate) static GB_EB_R: [OperandDef; 2] = [reg(B, Read), rm(B, Read)];
pub(crate) static GV_EV_R: [OperandDef; 2] = [reg(V, Read), rm(V, Read)];
pub(crate) static AL_IB_R: [OperandDef; 2] = [fixed(0, B, Read), imms(B)];
pub(crate) static AX_IZ_R: [OperandDef; 2] = [fixed(0, V, Read), imms(Z)];

// Plain moves.
pub(crate) static EB_GB_W: [OperandDef; 2] = [rm(B, Write), reg(B, Read)];
pub(crate) static EV_GV_W: [OperandDef; 2] = [rm(V, Write), reg(V, Read)];
pub(crate) static GB_EB_W: [OperandDef; 2] = [reg(B, Write), rm(B, Read)];
pub(crate) static GV_EV_W: [OperandDef; 2] = [reg(V, Write), rm(V, Read)];

// Exchange.
pub(crate) static EB_GB_X: [OperandDef; 2] = [rm(B, ReadWrite), reg(B, ReadWrite)];
pub(crate) static EV_GV_X: [OperandDef; 2] = [rm(V, ReadWrite), reg(V, ReadWrite)];

// Implicit stack traffic.
pub(crate) static PUSH_IMPLICIT: [OperandDef; 2] = [RSP_RW, stack(Write)];
pub(crate) static POP_IMPLICIT: [OperandDef; 2] = [RSP_RW, stack(Read)];

// String pointer registers.
pub(crate) static SI_RW: OperandDef = fixed(6, AV, ReadWrite);
pub(crate) static DI_RW: OperandDef = fixed(7, AV, ReadWrite);

const fn slot(def: &'static InstDef) -> OpcodeSlot {
    OpcodeSlot::Inst(def)
}

// Group 1: 80/81/83 immediate ALU forms.

static ADD_EB_IB: InstDef = InstDef::new(Mn::ADD, &[rm(B, ReadWrite), imms(B)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static OR_EB_IB: InstDef = InstDef::new(Mn::OR, &[rm(B, ReadWrite), imms(B)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static ADC_EB_IB: InstDef = InstDef::new(Mn::ADC, &[rm(B, ReadWrite), imms(B)], f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SBB_EB_IB: InstDef = InstDef::new(Mn::SBB, &[rm(B, ReadWrite), imms(B)], f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static AND_EB_IB: InstDef = InstDef::new(Mn::AND, &[rm(B, ReadWrite), imms(B)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static SUB_EB_IB: InstDef = InstDef::new(Mn::SUB, &[rm(B, ReadWrite), imms(B)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static XOR_EB_IB: InstDef = InstDef::new(Mn::XOR, &[rm(B, ReadWrite), imms(B)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static CMP_EB_IB: InstDef = InstDef::new(Mn::CMP, &[rm(B, Read), imms(B)], f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);

pub(crate) static GRP1_80: GroupSelect = GroupSelect {
    slots: [
        slot(&ADD_EB_IB),
        slot(&OR_EB_IB),
        slot(&ADC_EB_IB),
        slot(&SBB_EB_IB),
        slot(&AND_EB_IB),
        slot(&SUB_EB_IB),
        slot(&XOR_EB_IB),
        slot(&CMP_EB_IB),
    ],
};

static ADD_EV_IZ: InstDef = InstDef::new(Mn::ADD, &[rm(V, ReadWrite), imms(Z)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static OR_EV_IZ: InstDef = InstDef::new(Mn::OR, &[rm(V, ReadWrite), imms(Z)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static ADC_EV_IZ: InstDef = InstDef::new(Mn::ADC, &[rm(V, ReadWrite), imms(Z)], f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SBB_EV_IZ: InstDef = InstDef::new(Mn::SBB, &[rm(V, ReadWrite), imms(Z)], f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static AND_EV_IZ: InstDef = InstDef::new(Mn::AND, &[rm(V, ReadWrite), imms(Z)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static SUB_EV_IZ: InstDef = InstDef::new(Mn::SUB, &[rm(V, ReadWrite), imms(Z)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static XOR_EV_IZ: InstDef = InstDef::new(Mn::XOR, &[rm(V, ReadWrite), imms(Z)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static CMP_EV_IZ: InstDef = InstDef::new(Mn::CMP, &[rm(V, Read), imms(Z)], f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);

pub(crate) static GRP1_81: GroupSelect = GroupSelect {
    slots: [
        slot(&ADD_EV_IZ),
        slot(&OR_EV_IZ),
        slot(&ADC_EV_IZ),
        slot(&SBB_EV_IZ),
        slot(&AND_EV_IZ),
        slot(&SUB_EV_IZ),
        slot(&XOR_EV_IZ),
        slot(&CMP_EV_IZ),
    ],
};

static ADD_EV_IB: InstDef = InstDef::new(Mn::ADD, &[rm(V, ReadWrite), imms(B)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static OR_EV_IB: InstDef = InstDef::new(Mn::OR, &[rm(V, ReadWrite), imms(B)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static ADC_EV_IB: InstDef = InstDef::new(Mn::ADC, &[rm(V, ReadWrite), imms(B)], f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static SBB_EV_IB: InstDef = InstDef::new(Mn::SBB, &[rm(V, ReadWrite), imms(B)], f::ARITH_CARRY, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static AND_EV_IB: InstDef = InstDef::new(Mn::AND, &[rm(V, ReadWrite), imms(B)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static SUB_EV_IB: InstDef = InstDef::new(Mn::SUB, &[rm(V, ReadWrite), imms(B)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static XOR_EV_IB: InstDef = InstDef::new(Mn::XOR, &[rm(V, ReadWrite), imms(B)], f::LOGIC, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static CMP_EV_IB: InstDef = InstDef::new(Mn::CMP, &[rm(V, Read), imms(B)], f::ARITH, M::ANY, PS::NONE, C::Arith, S::I86);

pub(crate) static GRP1_83: GroupSelect = GroupSelect {
    slots: [
        slot(&ADD_EV_IB),
        slot(&OR_EV_IB),
        slot(&ADC_EV_IB),
        slot(&SBB_EV_IB),
        slot(&AND_EV_IB),
        slot(&SUB_EV_IB),
        slot(&XOR_EV_IB),
        slot(&CMP_EV_IB),
    ],
};

// Group 1A: 8F is POP Ev in /0, undefined elsewhere (the XOP escape is
// resolved before the tables are consulted).

static POP_EV: InstDef = InstDef::new(Mn::POP, &[rm(VQ, Write)], f::NONE, M::ANY, PS::NONE, C::Pop, S::I86)
    .implicit(&POP_IMPLICIT);

pub(crate) static GRP1A_8F: GroupSelect = GroupSelect {
    slots: [
        slot(&POP_EV),
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
    ],
};

// Group 2: rotates and shifts, in the C0/C1 (imm8), D0/D1 (by 1) and
// D2/D3 (by CL) encodings.

static ONE: [OperandDef; 1] = [od(OpSpec::ImmOne, B, Read)];
static CL_R: [OperandDef; 1] = [fixed(1, B, Read)];

static ROL_EB_IB: InstDef = InstDef::new(Mn::ROL, &[rm(B, ReadWrite), imm(B)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86);
static ROR_EB_IB: InstDef = InstDef::new(Mn::ROR, &[rm(B, ReadWrite), imm(B)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86);
static RCL_EB_IB: InstDef = InstDef::new(Mn::RCL, &[rm(B, ReadWrite), imm(B)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86);
static RCR_EB_IB: InstDef = InstDef::new(Mn::RCR, &[rm(B, ReadWrite), imm(B)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86);
static SHL_EB_IB: InstDef = InstDef::new(Mn::SHL, &[rm(B, ReadWrite), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86);
static SHR_EB_IB: InstDef = InstDef::new(Mn::SHR, &[rm(B, ReadWrite), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86);
static SAR_EB_IB: InstDef = InstDef::new(Mn::SAR, &[rm(B, ReadWrite), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86);

pub(crate) static GRP2_C0: GroupSelect = GroupSelect {
    slots: [
        slot(&ROL_EB_IB),
        slot(&ROR_EB_IB),
        slot(&RCL_EB_IB),
        slot(&RCR_EB_IB),
        slot(&SHL_EB_IB),
        slot(&SHR_EB_IB),
        slot(&SHL_EB_IB),
        slot(&SAR_EB_IB),
    ],
};

static ROL_EV_IB: InstDef = InstDef::new(Mn::ROL, &[rm(V, ReadWrite), imm(B)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86);
static ROR_EV_IB: InstDef = InstDef::new(Mn::ROR, &[rm(V, ReadWrite), imm(B)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86);
static RCL_EV_IB: InstDef = InstDef::new(Mn::RCL, &[rm(V, ReadWrite), imm(B)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86);
static RCR_EV_IB: InstDef = InstDef::new(Mn::RCR, &[rm(V, ReadWrite), imm(B)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86);
static SHL_EV_IB: InstDef = InstDef::new(Mn::SHL, &[rm(V, ReadWrite), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86);
static SHR_EV_IB: InstDef = InstDef::new(Mn::SHR, &[rm(V, ReadWrite), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86);
static SAR_EV_IB: InstDef = InstDef::new(Mn::SAR, &[rm(V, ReadWrite), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86);

pub(crate) static GRP2_C1: GroupSelect = GroupSelect {
    slots: [
        slot(&ROL_EV_IB),
        slot(&ROR_EV_IB),
        slot(&RCL_EV_IB),
        slot(&RCR_EV_IB),
        slot(&SHL_EV_IB),
        slot(&SHR_EV_IB),
        slot(&SHL_EV_IB),
        slot(&SAR_EV_IB),
    ],
};

static ROL_EB_1: InstDef = InstDef::new(Mn::ROL, &[rm(B, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static ROR_EB_1: InstDef = InstDef::new(Mn::ROR, &[rm(B, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static RCL_EB_1: InstDef = InstDef::new(Mn::RCL, &[rm(B, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static RCR_EB_1: InstDef = InstDef::new(Mn::RCR, &[rm(B, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static SHL_EB_1: InstDef = InstDef::new(Mn::SHL, &[rm(B, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&ONE);
static SHR_EB_1: InstDef = InstDef::new(Mn::SHR, &[rm(B, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&ONE);
static SAR_EB_1: InstDef = InstDef::new(Mn::SAR, &[rm(B, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&ONE);

pub(crate) static GRP2_D0: GroupSelect = GroupSelect {
    slots: [
        slot(&ROL_EB_1),
        slot(&ROR_EB_1),
        slot(&RCL_EB_1),
        slot(&RCR_EB_1),
        slot(&SHL_EB_1),
        slot(&SHR_EB_1),
        slot(&SHL_EB_1),
        slot(&SAR_EB_1),
    ],
};

static ROL_EV_1: InstDef = InstDef::new(Mn::ROL, &[rm(V, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static ROR_EV_1: InstDef = InstDef::new(Mn::ROR, &[rm(V, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static RCL_EV_1: InstDef = InstDef::new(Mn::RCL, &[rm(V, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static RCR_EV_1: InstDef = InstDef::new(Mn::RCR, &[rm(V, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&ONE);
static SHL_EV_1: InstDef = InstDef::new(Mn::SHL, &[rm(V, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&ONE);
static SHR_EV_1: InstDef = InstDef::new(Mn::SHR, &[rm(V, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&ONE);
static SAR_EV_1: InstDef = InstDef::new(Mn::SAR, &[rm(V, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&ONE);

pub(crate) static GRP2_D1: GroupSelect = GroupSelect {
    slots: [
        slot(&ROL_EV_1),
        slot(&ROR_EV_1),
        slot(&RCL_EV_1),
        slot(&RCR_EV_1),
        slot(&SHL_EV_1),
        slot(&SHR_EV_1),
        slot(&SHL_EV_1),
        slot(&SAR_EV_1),
    ],
};

static ROL_EB_CL: InstDef = InstDef::new(Mn::ROL, &[rm(B, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static ROR_EB_CL: InstDef = InstDef::new(Mn::ROR, &[rm(B, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static RCL_EB_CL: InstDef = InstDef::new(Mn::RCL, &[rm(B, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static RCR_EB_CL: InstDef = InstDef::new(Mn::RCR, &[rm(B, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static SHL_EB_CL: InstDef = InstDef::new(Mn::SHL, &[rm(B, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&CL_R);
static SHR_EB_CL: InstDef = InstDef::new(Mn::SHR, &[rm(B, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&CL_R);
static SAR_EB_CL: InstDef = InstDef::new(Mn::SAR, &[rm(B, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&CL_R);

pub(crate) static GRP2_D2: GroupSelect = GroupSelect {
    slots: [
        slot(&ROL_EB_CL),
        slot(&ROR_EB_CL),
        slot(&RCL_EB_CL),
        slot(&RCR_EB_CL),
        slot(&SHL_EB_CL),
        slot(&SHR_EB_CL),
        slot(&SHL_EB_CL),
        slot(&SAR_EB_CL),
    ],
};

static ROL_EV_CL: InstDef = InstDef::new(Mn::ROL, &[rm(V, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static ROR_EV_CL: InstDef = InstDef::new(Mn::ROR, &[rm(V, ReadWrite)], f::ROTATE, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static RCL_EV_CL: InstDef = InstDef::new(Mn::RCL, &[rm(V, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static RCR_EV_CL: InstDef = InstDef::new(Mn::RCR, &[rm(V, ReadWrite)], f::ROTATE_CARRY, M::ANY, PS::NONE, C::Rotate, S::I86).implicit(&CL_R);
static SHL_EV_CL: InstDef = InstDef::new(Mn::SHL, &[rm(V, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&CL_R);
static SHR_EV_CL: InstDef = InstDef::new(Mn::SHR, &[rm(V, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&CL_R);
static SAR_EV_CL: InstDef = InstDef::new(Mn::SAR, &[rm(V, ReadWrite)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I86).implicit(&CL_R);

pub(crate) static GRP2_D3: GroupSelect = GroupSelect {
    slots: [
        slot(&ROL_EV_CL),
        slot(&ROR_EV_CL),
        slot(&RCL_EV_CL),
        slot(&RCR_EV_CL),
        slot(&SHL_EV_CL),
        slot(&SHR_EV_CL),
        slot(&SHL_EV_CL),
        slot(&SAR_EV_CL),
    ],
};

// Group 3: F6/F7 unary forms.

static AX_MUL_B: [OperandDef; 1] = [fixed(0, W, ReadWrite)];
static AX_DX_MUL: [OperandDef; 2] = [fixed(0, V, ReadWrite), fixed(2, V, Write)];
static AX_DX_DIV: [OperandDef; 2] = [fixed(0, V, ReadWrite), fixed(2, V, ReadWrite)];

static TEST_EB_IB: InstDef = InstDef::new(Mn::TEST, &[rm(B, Read), imms(B)], f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static NOT_EB: InstDef = InstDef::new(Mn::NOT, &[rm(B, ReadWrite)], f::NONE, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static NEG_EB: InstDef = InstDef::new(Mn::NEG, &[rm(B, ReadWrite)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static MUL_EB: InstDef = InstDef::new(Mn::MUL, &[rm(B, Read)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_MUL_B);
static IMUL_EB: InstDef = InstDef::new(Mn::IMUL, &[rm(B, Read)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_MUL_B);
static DIV_EB: InstDef = InstDef::new(Mn::DIV, &[rm(B, Read)], f::DIV, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_MUL_B);
static IDIV_EB: InstDef = InstDef::new(Mn::IDIV, &[rm(B, Read)], f::DIV, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_MUL_B);

pub(crate) static GRP3_F6: GroupSelect = GroupSelect {
    slots: [
        slot(&TEST_EB_IB),
        OpcodeSlot::None,
        slot(&NOT_EB),
        slot(&NEG_EB),
        slot(&MUL_EB),
        slot(&IMUL_EB),
        slot(&DIV_EB),
        slot(&IDIV_EB),
    ],
};

static TEST_EV_IZ: InstDef = InstDef::new(Mn::TEST, &[rm(V, Read), imms(Z)], f::LOGIC, M::ANY, PS::NONE, C::Logical, S::I86);
static NOT_EV: InstDef = InstDef::new(Mn::NOT, &[rm(V, ReadWrite)], f::NONE, M::ANY, PS::LOCKABLE, C::Logical, S::I86);
static NEG_EV: InstDef = InstDef::new(Mn::NEG, &[rm(V, ReadWrite)], f::ARITH, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static MUL_EV: InstDef = InstDef::new(Mn::MUL, &[rm(V, Read)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_DX_MUL);
static IMUL_EV: InstDef = InstDef::new(Mn::IMUL, &[rm(V, Read)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_DX_MUL);
static DIV_EV: InstDef = InstDef::new(Mn::DIV, &[rm(V, Read)], f::DIV, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_DX_DIV);
static IDIV_EV: InstDef = InstDef::new(Mn::IDIV, &[rm(V, Read)], f::DIV, M::ANY, PS::NONE, C::Arith, S::I86).implicit(&AX_DX_DIV);

pub(crate) static GRP3_F7: GroupSelect = GroupSelect {
    slots: [
        slot(&TEST_EV_IZ),
        OpcodeSlot::None,
        slot(&NOT_EV),
        slot(&NEG_EV),
        slot(&MUL_EV),
        slot(&IMUL_EV),
        slot(&DIV_EV),
        slot(&IDIV_EV),
    ],
};

// Group 4/5: FE/FF.

static INC_EB: InstDef = InstDef::new(Mn::INC, &[rm(B, ReadWrite)], f::INC_DEC, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static DEC_EB: InstDef = InstDef::new(Mn::DEC, &[rm(B, ReadWrite)], f::INC_DEC, M::ANY, PS::LOCKABLE, C::Arith, S::I86);

pub(crate) static GRP4_FE: GroupSelect = GroupSelect {
    slots: [
        slot(&INC_EB),
        slot(&DEC_EB),
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
    ],
};

static INC_EV: InstDef = InstDef::new(Mn::INC, &[rm(V, ReadWrite)], f::INC_DEC, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static DEC_EV: InstDef = InstDef::new(Mn::DEC, &[rm(V, ReadWrite)], f::INC_DEC, M::ANY, PS::LOCKABLE, C::Arith, S::I86);
static CALL_EV: InstDef = InstDef::new(Mn::CALL, &[rm(F64, Read)], f::NONE, M::ANY, PS::BND, C::Call, S::I86)
    .implicit(&PUSH_IMPLICIT);
static CALLF_MP: InstDef = InstDef::new(Mn::CALLF, &[mem(P, Read)], f::NONE, M::ANY, PS::NONE, C::Call, S::I86)
    .implicit(&PUSH_IMPLICIT);
static JMP_EV: InstDef = InstDef::new(Mn::JMP, &[rm(F64, Read)], f::NONE, M::ANY, PS::BND, C::Jump, S::I86);
static JMPF_MP: InstDef = InstDef::new(Mn::JMPF, &[mem(P, Read)], f::NONE, M::ANY, PS::NONE, C::Jump, S::I86);
static PUSH_EV: InstDef = InstDef::new(Mn::PUSH, &[rm(VQ, Read)], f::NONE, M::ANY, PS::NONE, C::Push, S::I86)
    .implicit(&PUSH_IMPLICIT);

pub(crate) static GRP5_FF: GroupSelect = GroupSelect {
    slots: [
        slot(&INC_EV),
        slot(&DEC_EV),
        slot(&CALL_EV),
        slot(&CALLF_MP),
        slot(&JMP_EV),
        slot(&JMPF_MP),
        slot(&PUSH_EV),
        OpcodeSlot::None,
    ],
};

// Group 11: C6/C7 immediate moves.

static MOV_EB_IB: InstDef = InstDef::new(Mn::MOV, &[rm(B, Write), imm(B)], f::NONE, M::ANY, PS::XRELEASE, C::DataTransfer, S::I86);
static MOV_EV_IZ: InstDef = InstDef::new(Mn::MOV, &[rm(V, Write), imms(Z)], f::NONE, M::ANY, PS::XRELEASE, C::DataTransfer, S::I86);

pub(crate) static GRP11_C6: GroupSelect = GroupSelect {
    slots: [
        slot(&MOV_EB_IB),
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
    ],
};

pub(crate) static GRP11_C7: GroupSelect = GroupSelect {
    slots: [
        slot(&MOV_EV_IZ),
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
        OpcodeSlot::None,
    ],
};
