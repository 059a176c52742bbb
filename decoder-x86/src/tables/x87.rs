//! x87 escape block (D8-DF).
//!
//! Memory forms dispatch on ModRM.reg; register forms dispatch on
//! ModRM.reg and, for the scattered one-off encodings, ModRM.rm.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::{fixed, mem, od, GroupSelect, InstDef, ModSelect, OpSpec, OpcodeSlot as Op, OperandDef, RmSelect, Sz::*};
use crate::flags::effect as f;
use crate::flags::{Flag, FlagAccess};
use crate::meta::{Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

const ___: Op = Op::None;

const fn st0(access: crate::operand::Access) -> OperandDef {
    od(OpSpec::St0, T, access)
}

const fn sti(access: crate::operand::Access) -> OperandDef {
    od(OpSpec::StRm, T, access)
}

const fn x87(mnemonic: Mn, operands: &'static [OperandDef], flags: f::Effects) -> InstDef {
    InstDef::new(mnemonic, operands, flags, M::ANY, PS::NONE, C::X87, S::X87)
}

static ST0_R: [OperandDef; 1] = [st0(Read)];
static ST0_W: [OperandDef; 1] = [st0(Write)];
static ST0_RW: [OperandDef; 1] = [st0(ReadWrite)];

static FNSTSW_EFFECTS: &[(Flag, FlagAccess)] = &[
    (Flag::C0, FlagAccess::Tested),
    (Flag::C1, FlagAccess::Tested),
    (Flag::C2, FlagAccess::Tested),
    (Flag::C3, FlagAccess::Tested),
];

/// FCHS/FABS clear C1 and scramble the rest.
static X87_UNARY: &[(Flag, FlagAccess)] = &[
    (Flag::C0, FlagAccess::Undefined),
    (Flag::C1, FlagAccess::Cleared),
    (Flag::C2, FlagAccess::Undefined),
    (Flag::C3, FlagAccess::Undefined),
];

// D8: single-precision arithmetic.

static FADD_M32: InstDef = x87(Mn::FADD, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FMUL_M32: InstDef = x87(Mn::FMUL, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FCOM_M32: InstDef = x87(Mn::FCOM, &[mem(D, Read)], f::X87_COMPARE).implicit(&ST0_R);
static FCOMP_M32: InstDef = x87(Mn::FCOMP, &[mem(D, Read)], f::X87_COMPARE).implicit(&ST0_R);
static FSUB_M32: InstDef = x87(Mn::FSUB, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FSUBR_M32: InstDef = x87(Mn::FSUBR, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FDIV_M32: InstDef = x87(Mn::FDIV, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FDIVR_M32: InstDef = x87(Mn::FDIVR, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_RW);

static D8_MEM: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FADD_M32), Op::Inst(&FMUL_M32), Op::Inst(&FCOM_M32), Op::Inst(&FCOMP_M32),
        Op::Inst(&FSUB_M32), Op::Inst(&FSUBR_M32), Op::Inst(&FDIV_M32), Op::Inst(&FDIVR_M32),
    ],
};

static FADD_ST_STI: InstDef = x87(Mn::FADD, &[st0(ReadWrite), sti(Read)], f::X87_ARITH);
static FMUL_ST_STI: InstDef = x87(Mn::FMUL, &[st0(ReadWrite), sti(Read)], f::X87_ARITH);
static FCOM_STI: InstDef = x87(Mn::FCOM, &[st0(Read), sti(Read)], f::X87_COMPARE);
static FCOMP_STI: InstDef = x87(Mn::FCOMP, &[st0(Read), sti(Read)], f::X87_COMPARE);
static FSUB_ST_STI: InstDef = x87(Mn::FSUB, &[st0(ReadWrite), sti(Read)], f::X87_ARITH);
static FSUBR_ST_STI: InstDef = x87(Mn::FSUBR, &[st0(ReadWrite), sti(Read)], f::X87_ARITH);
static FDIV_ST_STI: InstDef = x87(Mn::FDIV, &[st0(ReadWrite), sti(Read)], f::X87_ARITH);
static FDIVR_ST_STI: InstDef = x87(Mn::FDIVR, &[st0(ReadWrite), sti(Read)], f::X87_ARITH);

static D8_REG: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FADD_ST_STI), Op::Inst(&FMUL_ST_STI), Op::Inst(&FCOM_STI), Op::Inst(&FCOMP_STI),
        Op::Inst(&FSUB_ST_STI), Op::Inst(&FSUBR_ST_STI), Op::Inst(&FDIV_ST_STI), Op::Inst(&FDIVR_ST_STI),
    ],
};

pub(crate) static D8: ModSelect = ModSelect { mem: Op::Grp(&D8_MEM), reg: Op::Grp(&D8_REG) };

// D9: loads, stores, control word, constants and unaries.

static FLD_M32: InstDef = x87(Mn::FLD, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_W);
static FST_M32: InstDef = x87(Mn::FST, &[mem(D, Write)], f::X87_ARITH).implicit(&ST0_R);
static FSTP_M32: InstDef = x87(Mn::FSTP, &[mem(D, Write)], f::X87_ARITH).implicit(&ST0_R);
static FLDENV: InstDef = x87(Mn::FLDENV, &[mem(ENV, Read)], f::X87_EXAMINE);
static FLDCW: InstDef = x87(Mn::FLDCW, &[mem(W, Read)], f::NONE);
static FNSTENV: InstDef = x87(Mn::FNSTENV, &[mem(ENV, Write)], f::NONE);
static FNSTCW: InstDef = x87(Mn::FNSTCW, &[mem(W, Write)], f::NONE);

static D9_MEM: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FLD_M32), ___, Op::Inst(&FST_M32), Op::Inst(&FSTP_M32),
        Op::Inst(&FLDENV), Op::Inst(&FLDCW), Op::Inst(&FNSTENV), Op::Inst(&FNSTCW),
    ],
};

static FLD_STI: InstDef = x87(Mn::FLD, &[sti(Read)], f::X87_ARITH).implicit(&ST0_W);
static FXCH_STI: InstDef = x87(Mn::FXCH, &[st0(ReadWrite), sti(ReadWrite)], f::X87_ARITH);
static FNOP: InstDef = x87(Mn::FNOP, &[], f::NONE);
static FCHS: InstDef = x87(Mn::FCHS, &[], X87_UNARY).implicit(&ST0_RW);
static FABS: InstDef = x87(Mn::FABS, &[], X87_UNARY).implicit(&ST0_RW);
static FTST: InstDef = x87(Mn::FTST, &[], f::X87_COMPARE).implicit(&ST0_R);
static FXAM: InstDef = x87(Mn::FXAM, &[], f::X87_EXAMINE).implicit(&ST0_R);
static FLD1: InstDef = x87(Mn::FLD1, &[], f::X87_ARITH).implicit(&ST0_W);
static FLDZ: InstDef = x87(Mn::FLDZ, &[], f::X87_ARITH).implicit(&ST0_W);
static FSQRT: InstDef = x87(Mn::FSQRT, &[], f::X87_ARITH).implicit(&ST0_RW);

static D9_R2: RmSelect = RmSelect {
    slots: [Op::Inst(&FNOP), ___, ___, ___, ___, ___, ___, ___],
};
static D9_R4: RmSelect = RmSelect {
    slots: [Op::Inst(&FCHS), Op::Inst(&FABS), ___, ___, Op::Inst(&FTST), Op::Inst(&FXAM), ___, ___],
};
static D9_R5: RmSelect = RmSelect {
    slots: [Op::Inst(&FLD1), ___, ___, ___, ___, ___, Op::Inst(&FLDZ), ___],
};
static D9_R7: RmSelect = RmSelect {
    slots: [___, ___, Op::Inst(&FSQRT), ___, ___, ___, ___, ___],
};

static D9_REG: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FLD_STI), Op::Inst(&FXCH_STI), Op::Rm(&D9_R2), ___,
        Op::Rm(&D9_R4), Op::Rm(&D9_R5), ___, Op::Rm(&D9_R7),
    ],
};

pub(crate) static D9: ModSelect = ModSelect { mem: Op::Grp(&D9_MEM), reg: Op::Grp(&D9_REG) };

// DA: conditional moves on the integer-compare conditions.

static FCMOVB: InstDef = x87(Mn::FCMOVB, &[st0(CondWrite), sti(Read)], f::COND_B);
static FCMOVE: InstDef = x87(Mn::FCMOVE, &[st0(CondWrite), sti(Read)], f::COND_Z);
static FCMOVBE: InstDef = x87(Mn::FCMOVBE, &[st0(CondWrite), sti(Read)], f::COND_BE);
static FCMOVU: InstDef = x87(Mn::FCMOVU, &[st0(CondWrite), sti(Read)], f::COND_P);
static FUCOMPP: InstDef = x87(Mn::FUCOMPP, &[], f::X87_COMPARE).implicit(&ST0_R);

static DA_R5: RmSelect = RmSelect {
    slots: [___, Op::Inst(&FUCOMPP), ___, ___, ___, ___, ___, ___],
};

static DA_REG: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FCMOVB), Op::Inst(&FCMOVE), Op::Inst(&FCMOVBE), Op::Inst(&FCMOVU),
        ___, Op::Rm(&DA_R5), ___, ___,
    ],
};

pub(crate) static DA: ModSelect = ModSelect { mem: ___, reg: Op::Grp(&DA_REG) };

// DB: integer loads/stores, FCOMI, control.

static FILD_M32: InstDef = x87(Mn::FILD, &[mem(D, Read)], f::X87_ARITH).implicit(&ST0_W);
static FIST_M32: InstDef = x87(Mn::FIST, &[mem(D, Write)], f::X87_ARITH).implicit(&ST0_R);
static FISTP_M32: InstDef = x87(Mn::FISTP, &[mem(D, Write)], f::X87_ARITH).implicit(&ST0_R);
static FLD_M80: InstDef = x87(Mn::FLD, &[mem(T, Read)], f::X87_ARITH).implicit(&ST0_W);
static FSTP_M80: InstDef = x87(Mn::FSTP, &[mem(T, Write)], f::X87_ARITH).implicit(&ST0_R);

static DB_MEM: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FILD_M32), ___, Op::Inst(&FIST_M32), Op::Inst(&FISTP_M32),
        ___, Op::Inst(&FLD_M80), ___, Op::Inst(&FSTP_M80),
    ],
};

static FCMOVNB: InstDef = x87(Mn::FCMOVNB, &[st0(CondWrite), sti(Read)], f::COND_B);
static FCMOVNE: InstDef = x87(Mn::FCMOVNE, &[st0(CondWrite), sti(Read)], f::COND_Z);
static FCMOVNBE: InstDef = x87(Mn::FCMOVNBE, &[st0(CondWrite), sti(Read)], f::COND_BE);
static FCMOVNU: InstDef = x87(Mn::FCMOVNU, &[st0(CondWrite), sti(Read)], f::COND_P);
static FNCLEX: InstDef = x87(Mn::FNCLEX, &[], f::NONE);
static FNINIT: InstDef = x87(Mn::FNINIT, &[], f::NONE);
static FUCOMI: InstDef = x87(Mn::FUCOMI, &[st0(Read), sti(Read)], f::FCOMI);
static FCOMI: InstDef = x87(Mn::FCOMI, &[st0(Read), sti(Read)], f::FCOMI);

static DB_R4: RmSelect = RmSelect {
    slots: [___, ___, Op::Inst(&FNCLEX), Op::Inst(&FNINIT), ___, ___, ___, ___],
};

static DB_REG: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FCMOVNB), Op::Inst(&FCMOVNE), Op::Inst(&FCMOVNBE), Op::Inst(&FCMOVNU),
        Op::Rm(&DB_R4), Op::Inst(&FUCOMI), Op::Inst(&FCOMI), ___,
    ],
};

pub(crate) static DB: ModSelect = ModSelect { mem: Op::Grp(&DB_MEM), reg: Op::Grp(&DB_REG) };

// DC: double-precision arithmetic; register forms target st(i).

static FADD_M64: InstDef = x87(Mn::FADD, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FMUL_M64: InstDef = x87(Mn::FMUL, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FCOM_M64: InstDef = x87(Mn::FCOM, &[mem(Q, Read)], f::X87_COMPARE).implicit(&ST0_R);
static FCOMP_M64: InstDef = x87(Mn::FCOMP, &[mem(Q, Read)], f::X87_COMPARE).implicit(&ST0_R);
static FSUB_M64: InstDef = x87(Mn::FSUB, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FSUBR_M64: InstDef = x87(Mn::FSUBR, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FDIV_M64: InstDef = x87(Mn::FDIV, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_RW);
static FDIVR_M64: InstDef = x87(Mn::FDIVR, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_RW);

static DC_MEM: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FADD_M64), Op::Inst(&FMUL_M64), Op::Inst(&FCOM_M64), Op::Inst(&FCOMP_M64),
        Op::Inst(&FSUB_M64), Op::Inst(&FSUBR_M64), Op::Inst(&FDIV_M64), Op::Inst(&FDIVR_M64),
    ],
};

static FADD_STI_ST: InstDef = x87(Mn::FADD, &[sti(ReadWrite), st0(Read)], f::X87_ARITH);
static FMUL_STI_ST: InstDef = x87(Mn::FMUL, &[sti(ReadWrite), st0(Read)], f::X87_ARITH);
static FSUBR_STI_ST: InstDef = x87(Mn::FSUBR, &[sti(ReadWrite), st0(Read)], f::X87_ARITH);
static FSUB_STI_ST: InstDef = x87(Mn::FSUB, &[sti(ReadWrite), st0(Read)], f::X87_ARITH);
static FDIVR_STI_ST: InstDef = x87(Mn::FDIVR, &[sti(ReadWrite), st0(Read)], f::X87_ARITH);
static FDIV_STI_ST: InstDef = x87(Mn::FDIV, &[sti(ReadWrite), st0(Read)], f::X87_ARITH);

static DC_REG: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FADD_STI_ST), Op::Inst(&FMUL_STI_ST), ___, ___,
        Op::Inst(&FSUBR_STI_ST), Op::Inst(&FSUB_STI_ST), Op::Inst(&FDIVR_STI_ST), Op::Inst(&FDIV_STI_ST),
    ],
};

pub(crate) static DC: ModSelect = ModSelect { mem: Op::Grp(&DC_MEM), reg: Op::Grp(&DC_REG) };

// DD: double loads/stores, state save, FUCOM.

static FLD_M64: InstDef = x87(Mn::FLD, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_W);
static FST_M64: InstDef = x87(Mn::FST, &[mem(Q, Write)], f::X87_ARITH).implicit(&ST0_R);
static FSTP_M64: InstDef = x87(Mn::FSTP, &[mem(Q, Write)], f::X87_ARITH).implicit(&ST0_R);
static FRSTOR: InstDef = x87(Mn::FRSTOR, &[mem(ENV, Read)], f::X87_EXAMINE);
static FNSAVE: InstDef = x87(Mn::FNSAVE, &[mem(ENV, Write)], f::NONE);
static FNSTSW_M: InstDef = x87(Mn::FNSTSW, &[mem(W, Write)], FNSTSW_EFFECTS);

static DD_MEM: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FLD_M64), ___, Op::Inst(&FST_M64), Op::Inst(&FSTP_M64),
        Op::Inst(&FRSTOR), ___, Op::Inst(&FNSAVE), Op::Inst(&FNSTSW_M),
    ],
};

static FST_STI: InstDef = x87(Mn::FST, &[sti(Write)], f::X87_ARITH).implicit(&ST0_R);
static FSTP_STI: InstDef = x87(Mn::FSTP, &[sti(Write)], f::X87_ARITH).implicit(&ST0_R);
static FUCOM_STI: InstDef = x87(Mn::FUCOM, &[st0(Read), sti(Read)], f::X87_COMPARE);
static FUCOMP_STI: InstDef = x87(Mn::FUCOMP, &[st0(Read), sti(Read)], f::X87_COMPARE);

static DD_REG: GroupSelect = GroupSelect {
    slots: [
        ___, ___, Op::Inst(&FST_STI), Op::Inst(&FSTP_STI),
        Op::Inst(&FUCOM_STI), Op::Inst(&FUCOMP_STI), ___, ___,
    ],
};

pub(crate) static DD: ModSelect = ModSelect { mem: Op::Grp(&DD_MEM), reg: Op::Grp(&DD_REG) };

// DE: only the compare-and-pop-twice form is carried in this table build.

static FCOMPP: InstDef = x87(Mn::FCOMPP, &[], f::X87_COMPARE).implicit(&ST0_R);

static DE_R3: RmSelect = RmSelect {
    slots: [___, Op::Inst(&FCOMPP), ___, ___, ___, ___, ___, ___],
};

static DE_REG: GroupSelect = GroupSelect {
    slots: [___, ___, ___, Op::Rm(&DE_R3), ___, ___, ___, ___],
};

pub(crate) static DE: ModSelect = ModSelect { mem: ___, reg: Op::Grp(&DE_REG) };

// DF: short/long integer forms, FNSTSW AX, FCOMIP.

static FILD_M16: InstDef = x87(Mn::FILD, &[mem(W, Read)], f::X87_ARITH).implicit(&ST0_W);
static FIST_M16: InstDef = x87(Mn::FIST, &[mem(W, Write)], f::X87_ARITH).implicit(&ST0_R);
static FISTP_M16: InstDef = x87(Mn::FISTP, &[mem(W, Write)], f::X87_ARITH).implicit(&ST0_R);
static FILD_M64: InstDef = x87(Mn::FILD, &[mem(Q, Read)], f::X87_ARITH).implicit(&ST0_W);
static FISTP_M64: InstDef = x87(Mn::FISTP, &[mem(Q, Write)], f::X87_ARITH).implicit(&ST0_R);

static DF_MEM: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&FILD_M16), ___, Op::Inst(&FIST_M16), Op::Inst(&FISTP_M16),
        ___, Op::Inst(&FILD_M64), ___, Op::Inst(&FISTP_M64),
    ],
};

static FNSTSW_AX: InstDef = x87(Mn::FNSTSW, &[fixed(0, W, Write)], FNSTSW_EFFECTS);
static FUCOMIP: InstDef = x87(Mn::FUCOMIP, &[st0(Read), sti(Read)], f::FCOMI);
static FCOMIP: InstDef = x87(Mn::FCOMIP, &[st0(Read), sti(Read)], f::FCOMI);

static DF_R4: RmSelect = RmSelect {
    slots: [Op::Inst(&FNSTSW_AX), ___, ___, ___, ___, ___, ___, ___],
};

static DF_REG: GroupSelect = GroupSelect {
    slots: [
        ___, ___, ___, ___,
        Op::Rm(&DF_R4), Op::Inst(&FUCOMIP), Op::Inst(&FCOMIP), ___,
    ],
};

pub(crate) static DF: ModSelect = ModSelect { mem: Op::Grp(&DF_MEM), reg: Op::Grp(&DF_REG) };
