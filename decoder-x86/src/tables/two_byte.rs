//! Two-byte (0F) opcode map.
//!
//! Generated from the instruction database; hand edits will be overwritten.

use super::{
    fixed, imm, mem, od, opreg, reg, rel, rm, xreg, xrm, Escape, GroupSelect, InstDef, ModSelect,
    OpSpec, OpcodeSlot as Op, PrefixSelect, RmSelect, Sz::*, WSelect,
};
use crate::flags::effect as f;
use crate::meta::{cpuid, Category as C, IsaSet as S, ModeSet as M, PrefixSet as PS};
use crate::mnemonic::Mnemonic as Mn;
use crate::operand::Access::*;

const ___: Op = Op::None;

// 0F00: group 6.

static SLDT: InstDef = InstDef::new(Mn::SLDT, &[rm(W, Write)], f::NONE, M::PROT, PS::NONE, C::System, S::I286);
static STR: InstDef = InstDef::new(Mn::STR, &[rm(W, Write)], f::NONE, M::PROT, PS::NONE, C::System, S::I286);
static LLDT: InstDef = InstDef::new(Mn::LLDT, &[rm(W, Read)], f::NONE, M::PROT_PRIV, PS::NONE, C::System, S::I286);
static LTR: InstDef = InstDef::new(Mn::LTR, &[rm(W, Read)], f::NONE, M::PROT_PRIV, PS::NONE, C::System, S::I286);
static VERR: InstDef = InstDef::new(Mn::VERR, &[rm(W, Read)], f::ZF_ONLY, M::PROT, PS::NONE, C::System, S::I286);
static VERW: InstDef = InstDef::new(Mn::VERW, &[rm(W, Read)], f::ZF_ONLY, M::PROT, PS::NONE, C::System, S::I286);

static GRP6: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&SLDT), Op::Inst(&STR), Op::Inst(&LLDT), Op::Inst(&LTR),
        Op::Inst(&VERR), Op::Inst(&VERW), ___, ___,
    ],
};

// 0F01: group 7, with the register-form system leaves keyed by rm.

static SGDT: InstDef = InstDef::new(Mn::SGDT, &[mem(ENV, Write)], f::NONE, M::ANY, PS::NONE, C::System, S::I286);
static SIDT: InstDef = InstDef::new(Mn::SIDT, &[mem(ENV, Write)], f::NONE, M::ANY, PS::NONE, C::System, S::I286);
static LGDT: InstDef = InstDef::new(Mn::LGDT, &[mem(ENV, Read)], f::NONE, M::PRIV, PS::NONE, C::System, S::I286);
static LIDT: InstDef = InstDef::new(Mn::LIDT, &[mem(ENV, Read)], f::NONE, M::PRIV, PS::NONE, C::System, S::I286);
static SMSW: InstDef = InstDef::new(Mn::SMSW, &[rm(W, Write)], f::NONE, M::ANY, PS::NONE, C::System, S::I286);
static LMSW: InstDef = InstDef::new(Mn::LMSW, &[rm(W, Read)], f::NONE, M::PRIV, PS::NONE, C::System, S::I286);
static INVLPG: InstDef = InstDef::new(Mn::INVLPG, &[mem(B, Read)], f::NONE, M::PRIV, PS::NONE, C::System, S::I486);

static VMCALL: InstDef = InstDef::new(Mn::VMCALL, &[], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMLAUNCH: InstDef = InstDef::new(Mn::VMLAUNCH, &[], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMRESUME: InstDef = InstDef::new(Mn::VMRESUME, &[], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMXOFF: InstDef = InstDef::new(Mn::VMXOFF, &[], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static MONITOR: InstDef = InstDef::new(Mn::MONITOR, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::Monitor)
    .implicit(&[fixed(0, AV, Read), fixed(1, D, Read), fixed(2, D, Read)])
    .cpuid(&cpuid::MONITOR);
static MWAIT: InstDef = InstDef::new(Mn::MWAIT, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::Monitor)
    .implicit(&[fixed(0, D, Read), fixed(1, D, Read)])
    .cpuid(&cpuid::MONITOR);
static XGETBV: InstDef = InstDef::new(Mn::XGETBV, &[], f::NONE, M::ANY, PS::NONE, C::System, S::Xsave)
    .implicit(&[fixed(1, D, Read), fixed(0, D, Write), fixed(2, D, Write)])
    .cpuid(&cpuid::XSAVE);
static XSETBV: InstDef = InstDef::new(Mn::XSETBV, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::Xsave)
    .implicit(&[fixed(1, D, Read), fixed(0, D, Read), fixed(2, D, Read)])
    .cpuid(&cpuid::XSAVE);
static SWAPGS: InstDef = InstDef::new(Mn::SWAPGS, &[], f::NONE, M::LONG_PRIV, PS::NONE, C::System, S::LongMode);
static RDTSCP: InstDef = InstDef::new(Mn::RDTSCP, &[], f::NONE, M::ANY, PS::NONE, C::System, S::Tsc)
    .implicit(&[fixed(2, D, Write), fixed(0, D, Write), fixed(1, D, Write)])
    .cpuid(&cpuid::RDTSCP);

static G7_R0: RmSelect = RmSelect {
    slots: [___, Op::Inst(&VMCALL), Op::Inst(&VMLAUNCH), Op::Inst(&VMRESUME), Op::Inst(&VMXOFF), ___, ___, ___],
};
static G7_R1: RmSelect = RmSelect {
    slots: [Op::Inst(&MONITOR), Op::Inst(&MWAIT), ___, ___, ___, ___, ___, ___],
};
static G7_R2: RmSelect = RmSelect {
    slots: [Op::Inst(&XGETBV), Op::Inst(&XSETBV), ___, ___, ___, ___, ___, ___],
};
static G7_R7: RmSelect = RmSelect {
    slots: [Op::Inst(&SWAPGS), Op::Inst(&RDTSCP), ___, ___, ___, ___, ___, ___],
};

static G7_S0: ModSelect = ModSelect { mem: Op::Inst(&SGDT), reg: Op::Rm(&G7_R0) };
static G7_S1: ModSelect = ModSelect { mem: Op::Inst(&SIDT), reg: Op::Rm(&G7_R1) };
static G7_S2: ModSelect = ModSelect { mem: Op::Inst(&LGDT), reg: Op::Rm(&G7_R2) };
static G7_S3: ModSelect = ModSelect { mem: Op::Inst(&LIDT), reg: ___ };
static G7_S7: ModSelect = ModSelect { mem: Op::Inst(&INVLPG), reg: Op::Rm(&G7_R7) };

static GRP7: GroupSelect = GroupSelect {
    slots: [
        Op::ModSplit(&G7_S0), Op::ModSplit(&G7_S1), Op::ModSplit(&G7_S2), Op::ModSplit(&G7_S3),
        Op::Inst(&SMSW), ___, Op::Inst(&LMSW), Op::ModSplit(&G7_S7),
    ],
};

// 0F02-0F0B.

static LAR: InstDef = InstDef::new(Mn::LAR, &[reg(V, Write), rm(W, Read)], f::ZF_ONLY, M::PROT, PS::NONE, C::System, S::I286);
static LSL: InstDef = InstDef::new(Mn::LSL, &[reg(V, Write), rm(W, Read)], f::ZF_ONLY, M::PROT, PS::NONE, C::System, S::I286);
static SYSCALL: InstDef = InstDef::new(Mn::SYSCALL, &[], f::NONE, M::LONG_ONLY, PS::NONE, C::Call, S::LongMode)
    .implicit(&[fixed(1, Q, Write), fixed(11, Q, Write)]);
static CLTS: InstDef = InstDef::new(Mn::CLTS, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::I286);
static SYSRET: InstDef = InstDef::new(Mn::SYSRET, &[], f::NONE, M::LONG_PRIV, PS::NONE, C::Ret, S::LongMode)
    .implicit(&[fixed(1, Q, Read), fixed(11, Q, Read)]);
static INVD: InstDef = InstDef::new(Mn::INVD, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::I486);
static WBINVD: InstDef = InstDef::new(Mn::WBINVD, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::I486);
static UD2: InstDef = InstDef::new(Mn::UD2, &[], f::NONE, M::ANY, PS::NONE, C::Misc, S::I186);

// 0F10-0F17: SSE moves, mandatory-prefix selected.

static MOVUPS_G_E: InstDef = InstDef::new(Mn::MOVUPS, &[xreg(X, Write), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MOVUPS_E_G: InstDef = InstDef::new(Mn::MOVUPS, &[xrm(X, Write), xreg(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MOVUPD_G_E: InstDef = InstDef::new(Mn::MOVUPD, &[xreg(X, Write), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVUPD_E_G: InstDef = InstDef::new(Mn::MOVUPD, &[xrm(X, Write), xreg(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVSS_G_E: InstDef = InstDef::new(Mn::MOVSS, &[xreg(D, Write), xrm(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MOVSS_E_G: InstDef = InstDef::new(Mn::MOVSS, &[xrm(D, Write), xreg(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MOVSD_G_E: InstDef = InstDef::new(Mn::MOVSD, &[xreg(Q, Write), xrm(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVSD_E_G: InstDef = InstDef::new(Mn::MOVSD, &[xrm(Q, Write), xreg(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);

static PS_10: PrefixSelect = PrefixSelect {
    none: Op::Inst(&MOVUPS_G_E),
    p66: Op::Inst(&MOVUPD_G_E),
    pf3: Op::Inst(&MOVSS_G_E),
    pf2: Op::Inst(&MOVSD_G_E),
};
static PS_11: PrefixSelect = PrefixSelect {
    none: Op::Inst(&MOVUPS_E_G),
    p66: Op::Inst(&MOVUPD_E_G),
    pf3: Op::Inst(&MOVSS_E_G),
    pf2: Op::Inst(&MOVSD_E_G),
};

// 0F18: prefetch group.

static PREFETCHNTA: InstDef = InstDef::new(Mn::PREFETCHNTA, &[mem(B, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse).cpuid(&cpuid::SSE);
static PREFETCHT0: InstDef = InstDef::new(Mn::PREFETCHT0, &[mem(B, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse).cpuid(&cpuid::SSE);
static PREFETCHT1: InstDef = InstDef::new(Mn::PREFETCHT1, &[mem(B, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse).cpuid(&cpuid::SSE);
static PREFETCHT2: InstDef = InstDef::new(Mn::PREFETCHT2, &[mem(B, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse).cpuid(&cpuid::SSE);

static GRP16: GroupSelect = GroupSelect {
    slots: [
        Op::Inst(&PREFETCHNTA), Op::Inst(&PREFETCHT0), Op::Inst(&PREFETCHT1), Op::Inst(&PREFETCHT2),
        ___, ___, ___, ___,
    ],
};

static NOP_EV: InstDef = InstDef::new(Mn::NOP, &[rm(V, Read)], f::NONE, M::ANY, PS::NONE, C::Nop, S::Pentium);

// 0F20-0F23: control/debug register moves. These always behave as mod=3;
// stray displacement bytes are length only.

static MOV_R_CR: InstDef = InstDef::new(Mn::MOV, &[rm(Y, Write), od(OpSpec::RegCtrl, Y, Read)], f::NONE, M::PRIV, PS::NONE, C::DataTransfer, S::I386);
static MOV_R_DR: InstDef = InstDef::new(Mn::MOV, &[rm(Y, Write), od(OpSpec::RegDbg, Y, Read)], f::NONE, M::PRIV, PS::NONE, C::DataTransfer, S::I386);
static MOV_CR_R: InstDef = InstDef::new(Mn::MOV, &[od(OpSpec::RegCtrl, Y, Write), rm(Y, Read)], f::NONE, M::PRIV, PS::NONE, C::DataTransfer, S::I386);
static MOV_DR_R: InstDef = InstDef::new(Mn::MOV, &[od(OpSpec::RegDbg, Y, Write), rm(Y, Read)], f::NONE, M::PRIV, PS::NONE, C::DataTransfer, S::I386);

// 0F28-0F2F.

static MOVAPS_G_E: InstDef = InstDef::new(Mn::MOVAPS, &[xreg(X, Write), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MOVAPS_E_G: InstDef = InstDef::new(Mn::MOVAPS, &[xrm(X, Write), xreg(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MOVAPD_G_E: InstDef = InstDef::new(Mn::MOVAPD, &[xreg(X, Write), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVAPD_E_G: InstDef = InstDef::new(Mn::MOVAPD, &[xrm(X, Write), xreg(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);

static PS_28: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVAPS_G_E), p66: Op::Inst(&MOVAPD_G_E), pf3: ___, pf2: ___ };
static PS_29: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVAPS_E_G), p66: Op::Inst(&MOVAPD_E_G), pf3: ___, pf2: ___ };

static UCOMISS: InstDef = InstDef::new(Mn::UCOMISS, &[xreg(D, Read), xrm(D, Read)], f::SSE_COMPARE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static UCOMISD: InstDef = InstDef::new(Mn::UCOMISD, &[xreg(Q, Read), xrm(Q, Read)], f::SSE_COMPARE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static COMISS: InstDef = InstDef::new(Mn::COMISS, &[xreg(D, Read), xrm(D, Read)], f::SSE_COMPARE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static COMISD: InstDef = InstDef::new(Mn::COMISD, &[xreg(Q, Read), xrm(Q, Read)], f::SSE_COMPARE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);

static PS_2E: PrefixSelect = PrefixSelect { none: Op::Inst(&UCOMISS), p66: Op::Inst(&UCOMISD), pf3: ___, pf2: ___ };
static PS_2F: PrefixSelect = PrefixSelect { none: Op::Inst(&COMISS), p66: Op::Inst(&COMISD), pf3: ___, pf2: ___ };

// 0F30-0F35.

static WRMSR: InstDef = InstDef::new(Mn::WRMSR, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::Msr)
    .implicit(&[fixed(1, D, Read), fixed(0, D, Read), fixed(2, D, Read)])
    .cpuid(&cpuid::MSR);
static RDTSC: InstDef = InstDef::new(Mn::RDTSC, &[], f::NONE, M::ANY, PS::NONE, C::System, S::Tsc)
    .implicit(&[fixed(2, D, Write), fixed(0, D, Write)])
    .cpuid(&cpuid::TSC);
static RDMSR: InstDef = InstDef::new(Mn::RDMSR, &[], f::NONE, M::PRIV, PS::NONE, C::System, S::Msr)
    .implicit(&[fixed(1, D, Read), fixed(0, D, Write), fixed(2, D, Write)])
    .cpuid(&cpuid::MSR);
static RDPMC: InstDef = InstDef::new(Mn::RDPMC, &[], f::NONE, M::ANY, PS::NONE, C::System, S::Pentium)
    .implicit(&[fixed(1, D, Read), fixed(0, D, Write), fixed(2, D, Write)]);
static SYSENTER: InstDef = InstDef::new(Mn::SYSENTER, &[], f::NONE, M::PROT, PS::NONE, C::Call, S::Pentium);
static SYSEXIT: InstDef = InstDef::new(Mn::SYSEXIT, &[], f::NONE, M::PROT_PRIV, PS::NONE, C::Ret, S::Pentium);

// 0F40-0F4F: CMOVcc.

static CMOVO: InstDef = InstDef::new(Mn::CMOVO, &[reg(V, CondWrite), rm(V, Read)], f::COND_O, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVNO: InstDef = InstDef::new(Mn::CMOVNO, &[reg(V, CondWrite), rm(V, Read)], f::COND_O, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVB: InstDef = InstDef::new(Mn::CMOVB, &[reg(V, CondWrite), rm(V, Read)], f::COND_B, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVNB: InstDef = InstDef::new(Mn::CMOVNB, &[reg(V, CondWrite), rm(V, Read)], f::COND_B, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVZ: InstDef = InstDef::new(Mn::CMOVZ, &[reg(V, CondWrite), rm(V, Read)], f::COND_Z, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVNZ: InstDef = InstDef::new(Mn::CMOVNZ, &[reg(V, CondWrite), rm(V, Read)], f::COND_Z, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVNA: InstDef = InstDef::new(Mn::CMOVNA, &[reg(V, CondWrite), rm(V, Read)], f::COND_BE, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVA: InstDef = InstDef::new(Mn::CMOVA, &[reg(V, CondWrite), rm(V, Read)], f::COND_BE, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVS: InstDef = InstDef::new(Mn::CMOVS, &[reg(V, CondWrite), rm(V, Read)], f::COND_S, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVNS: InstDef = InstDef::new(Mn::CMOVNS, &[reg(V, CondWrite), rm(V, Read)], f::COND_S, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVP: InstDef = InstDef::new(Mn::CMOVP, &[reg(V, CondWrite), rm(V, Read)], f::COND_P, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVNP: InstDef = InstDef::new(Mn::CMOVNP, &[reg(V, CondWrite), rm(V, Read)], f::COND_P, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVL: InstDef = InstDef::new(Mn::CMOVL, &[reg(V, CondWrite), rm(V, Read)], f::COND_L, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVGE: InstDef = InstDef::new(Mn::CMOVGE, &[reg(V, CondWrite), rm(V, Read)], f::COND_L, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVLE: InstDef = InstDef::new(Mn::CMOVLE, &[reg(V, CondWrite), rm(V, Read)], f::COND_LE, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);
static CMOVG: InstDef = InstDef::new(Mn::CMOVG, &[reg(V, CondWrite), rm(V, Read)], f::COND_LE, M::ANY, PS::NONE, C::CondMov, S::Cmov).cpuid(&cpuid::CMOV);

// 0F54-0F5F: packed/scalar float arithmetic.

static ANDPS: InstDef = InstDef::new(Mn::ANDPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static ANDPD: InstDef = InstDef::new(Mn::ANDPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static ANDNPS: InstDef = InstDef::new(Mn::ANDNPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static ANDNPD: InstDef = InstDef::new(Mn::ANDNPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static ORPS: InstDef = InstDef::new(Mn::ORPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static ORPD: InstDef = InstDef::new(Mn::ORPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static XORPS: InstDef = InstDef::new(Mn::XORPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static XORPD: InstDef = InstDef::new(Mn::XORPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);

static PS_54: PrefixSelect = PrefixSelect { none: Op::Inst(&ANDPS), p66: Op::Inst(&ANDPD), pf3: ___, pf2: ___ };
static PS_55: PrefixSelect = PrefixSelect { none: Op::Inst(&ANDNPS), p66: Op::Inst(&ANDNPD), pf3: ___, pf2: ___ };
static PS_56: PrefixSelect = PrefixSelect { none: Op::Inst(&ORPS), p66: Op::Inst(&ORPD), pf3: ___, pf2: ___ };
static PS_57: PrefixSelect = PrefixSelect { none: Op::Inst(&XORPS), p66: Op::Inst(&XORPD), pf3: ___, pf2: ___ };

static ADDPS: InstDef = InstDef::new(Mn::ADDPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static ADDPD: InstDef = InstDef::new(Mn::ADDPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static ADDSS: InstDef = InstDef::new(Mn::ADDSS, &[xreg(D, ReadWrite), xrm(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static ADDSD: InstDef = InstDef::new(Mn::ADDSD, &[xreg(Q, ReadWrite), xrm(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MULPS: InstDef = InstDef::new(Mn::MULPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MULPD: InstDef = InstDef::new(Mn::MULPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MULSS: InstDef = InstDef::new(Mn::MULSS, &[xreg(D, ReadWrite), xrm(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static MULSD: InstDef = InstDef::new(Mn::MULSD, &[xreg(Q, ReadWrite), xrm(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static SUBPS: InstDef = InstDef::new(Mn::SUBPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static SUBPD: InstDef = InstDef::new(Mn::SUBPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static SUBSS: InstDef = InstDef::new(Mn::SUBSS, &[xreg(D, ReadWrite), xrm(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static SUBSD: InstDef = InstDef::new(Mn::SUBSD, &[xreg(Q, ReadWrite), xrm(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static DIVPS: InstDef = InstDef::new(Mn::DIVPS, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static DIVPD: InstDef = InstDef::new(Mn::DIVPD, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static DIVSS: InstDef = InstDef::new(Mn::DIVSS, &[xreg(D, ReadWrite), xrm(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static DIVSD: InstDef = InstDef::new(Mn::DIVSD, &[xreg(Q, ReadWrite), xrm(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);

static PS_58: PrefixSelect = PrefixSelect { none: Op::Inst(&ADDPS), p66: Op::Inst(&ADDPD), pf3: Op::Inst(&ADDSS), pf2: Op::Inst(&ADDSD) };
static PS_59: PrefixSelect = PrefixSelect { none: Op::Inst(&MULPS), p66: Op::Inst(&MULPD), pf3: Op::Inst(&MULSS), pf2: Op::Inst(&MULSD) };
static PS_5C: PrefixSelect = PrefixSelect { none: Op::Inst(&SUBPS), p66: Op::Inst(&SUBPD), pf3: Op::Inst(&SUBSS), pf2: Op::Inst(&SUBSD) };
static PS_5E: PrefixSelect = PrefixSelect { none: Op::Inst(&DIVPS), p66: Op::Inst(&DIVPD), pf3: Op::Inst(&DIVSS), pf2: Op::Inst(&DIVSD) };

// 0F6E/6F, 0F7E/7F: GP<->vector and vector moves.

static MOVD_P_E: InstDef = InstDef::new(Mn::MOVD, &[od(OpSpec::RegMm, Q, Write), rm(V, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Mmx).cpuid(&cpuid::MMX);
static MOVD_V_E: InstDef = InstDef::new(Mn::MOVD, &[xreg(DQ, Write), rm(V, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVD_E_P: InstDef = InstDef::new(Mn::MOVD, &[rm(V, Write), od(OpSpec::RegMm, Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Mmx).cpuid(&cpuid::MMX);
static MOVD_E_V: InstDef = InstDef::new(Mn::MOVD, &[rm(V, Write), xreg(DQ, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVQ_P_Q: InstDef = InstDef::new(Mn::MOVQ, &[od(OpSpec::RegMm, Q, Write), od(OpSpec::RmMm, Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Mmx).cpuid(&cpuid::MMX);
static MOVQ_Q_P: InstDef = InstDef::new(Mn::MOVQ, &[od(OpSpec::RmMm, Q, Write), od(OpSpec::RegMm, Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Mmx).cpuid(&cpuid::MMX);
static MOVQ_V_W: InstDef = InstDef::new(Mn::MOVQ, &[xreg(Q, Write), xrm(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVQ_W_V: InstDef = InstDef::new(Mn::MOVQ, &[xrm(Q, Write), xreg(Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVDQA_G_E: InstDef = InstDef::new(Mn::MOVDQA, &[xreg(X, Write), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVDQA_E_G: InstDef = InstDef::new(Mn::MOVDQA, &[xrm(X, Write), xreg(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVDQU_G_E: InstDef = InstDef::new(Mn::MOVDQU, &[xreg(X, Write), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static MOVDQU_E_G: InstDef = InstDef::new(Mn::MOVDQU, &[xrm(X, Write), xreg(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);

static PS_6E: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVD_P_E), p66: Op::Inst(&MOVD_V_E), pf3: ___, pf2: ___ };
static PS_6F: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVQ_P_Q), p66: Op::Inst(&MOVDQA_G_E), pf3: Op::Inst(&MOVDQU_G_E), pf2: ___ };
static PS_7E: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVD_E_P), p66: Op::Inst(&MOVD_E_V), pf3: Op::Inst(&MOVQ_V_W), pf2: ___ };
static PS_7F: PrefixSelect = PrefixSelect { none: Op::Inst(&MOVQ_Q_P), p66: Op::Inst(&MOVDQA_E_G), pf3: Op::Inst(&MOVDQU_E_G), pf2: ___ };

// 0F78/79: VMX VMCS accessors.

static VMREAD: InstDef = InstDef::new(Mn::VMREAD, &[rm(Y, Write), reg(Y, Read)], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMWRITE: InstDef = InstDef::new(Mn::VMWRITE, &[reg(Y, Read), rm(Y, Read)], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);

// 0F80-0F8F: near conditional branches.

static JO_JZ: InstDef = InstDef::new(Mn::JO, &[rel(Z)], f::COND_O, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JNO_JZ: InstDef = InstDef::new(Mn::JNO, &[rel(Z)], f::COND_O, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JB_JZ: InstDef = InstDef::new(Mn::JB, &[rel(Z)], f::COND_B, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JNB_JZ: InstDef = InstDef::new(Mn::JNB, &[rel(Z)], f::COND_B, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JZ_JZ: InstDef = InstDef::new(Mn::JZ, &[rel(Z)], f::COND_Z, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JNZ_JZ: InstDef = InstDef::new(Mn::JNZ, &[rel(Z)], f::COND_Z, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JNA_JZ: InstDef = InstDef::new(Mn::JNA, &[rel(Z)], f::COND_BE, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JA_JZ: InstDef = InstDef::new(Mn::JA, &[rel(Z)], f::COND_BE, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JS_JZ: InstDef = InstDef::new(Mn::JS, &[rel(Z)], f::COND_S, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JNS_JZ: InstDef = InstDef::new(Mn::JNS, &[rel(Z)], f::COND_S, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JP_JZ: InstDef = InstDef::new(Mn::JP, &[rel(Z)], f::COND_P, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JNP_JZ: InstDef = InstDef::new(Mn::JNP, &[rel(Z)], f::COND_P, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JL_JZ: InstDef = InstDef::new(Mn::JL, &[rel(Z)], f::COND_L, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JGE_JZ: InstDef = InstDef::new(Mn::JGE, &[rel(Z)], f::COND_L, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JLE_JZ: InstDef = InstDef::new(Mn::JLE, &[rel(Z)], f::COND_LE, M::ANY, PS::BRANCH, C::Jump, S::I386);
static JG_JZ: InstDef = InstDef::new(Mn::JG, &[rel(Z)], f::COND_LE, M::ANY, PS::BRANCH, C::Jump, S::I386);

// 0F90-0F9F: SETcc.

static SETO: InstDef = InstDef::new(Mn::SETO, &[rm(B, Write)], f::COND_O, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETNO: InstDef = InstDef::new(Mn::SETNO, &[rm(B, Write)], f::COND_O, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETB: InstDef = InstDef::new(Mn::SETB, &[rm(B, Write)], f::COND_B, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETAE: InstDef = InstDef::new(Mn::SETAE, &[rm(B, Write)], f::COND_B, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETZ: InstDef = InstDef::new(Mn::SETZ, &[rm(B, Write)], f::COND_Z, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETNZ: InstDef = InstDef::new(Mn::SETNZ, &[rm(B, Write)], f::COND_Z, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETBE: InstDef = InstDef::new(Mn::SETBE, &[rm(B, Write)], f::COND_BE, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETA: InstDef = InstDef::new(Mn::SETA, &[rm(B, Write)], f::COND_BE, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETS: InstDef = InstDef::new(Mn::SETS, &[rm(B, Write)], f::COND_S, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETNS: InstDef = InstDef::new(Mn::SETNS, &[rm(B, Write)], f::COND_S, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETP: InstDef = InstDef::new(Mn::SETP, &[rm(B, Write)], f::COND_P, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETNP: InstDef = InstDef::new(Mn::SETNP, &[rm(B, Write)], f::COND_P, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETL: InstDef = InstDef::new(Mn::SETL, &[rm(B, Write)], f::COND_L, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETGE: InstDef = InstDef::new(Mn::SETGE, &[rm(B, Write)], f::COND_L, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETLE: InstDef = InstDef::new(Mn::SETLE, &[rm(B, Write)], f::COND_LE, M::ANY, PS::NONE, C::SetCc, S::I386);
static SETG: InstDef = InstDef::new(Mn::SETG, &[rm(B, Write)], f::COND_LE, M::ANY, PS::NONE, C::SetCc, S::I386);

// 0FA0-0FAF.

static PUSH_FS: InstDef = InstDef::new(Mn::PUSH, &[od(OpSpec::FixedSeg(4), V, Read)], f::NONE, M::ANY, PS::NONE, C::Push, S::I386)
    .implicit(&super::groups::PUSH_IMPLICIT);
static POP_FS: InstDef = InstDef::new(Mn::POP, &[od(OpSpec::FixedSeg(4), V, Write)], f::NONE, M::ANY, PS::NONE, C::Pop, S::I386)
    .implicit(&super::groups::POP_IMPLICIT);
static PUSH_GS: InstDef = InstDef::new(Mn::PUSH, &[od(OpSpec::FixedSeg(5), V, Read)], f::NONE, M::ANY, PS::NONE, C::Push, S::I386)
    .implicit(&super::groups::PUSH_IMPLICIT);
static POP_GS: InstDef = InstDef::new(Mn::POP, &[od(OpSpec::FixedSeg(5), V, Write)], f::NONE, M::ANY, PS::NONE, C::Pop, S::I386)
    .implicit(&super::groups::POP_IMPLICIT);

static CPUID: InstDef = InstDef::new(Mn::CPUID, &[], f::NONE, M::ANY, PS::NONE, C::System, S::Cpuid)
    .implicit(&[fixed(0, D, ReadWrite), fixed(1, D, ReadWrite), fixed(3, D, Write), fixed(2, D, Write)]);
static BT_EV_GV: InstDef = InstDef::new(Mn::BT, &[od(OpSpec::RmGpBitBase, V, Read), reg(V, Read)], f::BIT_TEST, M::ANY, PS::NONE, C::Bit, S::I386);
static SHLD_IB: InstDef = InstDef::new(Mn::SHLD, &[rm(V, ReadWrite), reg(V, Read), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I386);
static SHLD_CL: InstDef = InstDef::new(Mn::SHLD, &[rm(V, ReadWrite), reg(V, Read)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I386)
    .implicit(&[fixed(1, B, Read)]);
static RSM: InstDef = InstDef::new(Mn::RSM, &[], f::WRITE_ALL, M::SMM.union(M::RING0), PS::NONE, C::System, S::Pentium);
static BTS_EV_GV: InstDef = InstDef::new(Mn::BTS, &[od(OpSpec::RmGpBitBase, V, ReadWrite), reg(V, Read)], f::BIT_TEST, M::ANY, PS::LOCKABLE, C::Bit, S::I386);
static SHRD_IB: InstDef = InstDef::new(Mn::SHRD, &[rm(V, ReadWrite), reg(V, Read), imm(B)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I386);
static SHRD_CL: InstDef = InstDef::new(Mn::SHRD, &[rm(V, ReadWrite), reg(V, Read)], f::SHIFT, M::ANY, PS::NONE, C::Shift, S::I386)
    .implicit(&[fixed(1, B, Read)]);
static IMUL_GV_EV: InstDef = InstDef::new(Mn::IMUL, &[reg(V, ReadWrite), rm(V, Read)], f::MUL, M::ANY, PS::NONE, C::Arith, S::I386);

// 0FAE: group 15, fence and state-management forms.

static FXSAVE: InstDef = InstDef::new(Mn::FXSAVE, &[mem(ENV, Write)], f::NONE, M::ANY, PS::NONE, C::System, S::Sse).cpuid(&cpuid::FXSR);
static FXRSTOR: InstDef = InstDef::new(Mn::FXRSTOR, &[mem(ENV, Read)], f::NONE, M::ANY, PS::NONE, C::System, S::Sse).cpuid(&cpuid::FXSR);
static LDMXCSR: InstDef = InstDef::new(Mn::LDMXCSR, &[mem(D, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static STMXCSR: InstDef = InstDef::new(Mn::STMXCSR, &[mem(D, Write)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse).cpuid(&cpuid::SSE);
static XSAVE: InstDef = InstDef::new(Mn::XSAVE, &[mem(ENV, Write)], f::NONE, M::ANY, PS::NONE, C::System, S::Xsave)
    .implicit(&[fixed(2, D, Read), fixed(0, D, Read)])
    .cpuid(&cpuid::XSAVE);
static XRSTOR: InstDef = InstDef::new(Mn::XRSTOR, &[mem(ENV, Read)], f::NONE, M::ANY, PS::NONE, C::System, S::Xsave)
    .implicit(&[fixed(2, D, Read), fixed(0, D, Read)])
    .cpuid(&cpuid::XSAVE);
static LFENCE: InstDef = InstDef::new(Mn::LFENCE, &[], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse2).cpuid(&cpuid::SSE2);
static MFENCE: InstDef = InstDef::new(Mn::MFENCE, &[], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse2).cpuid(&cpuid::SSE2);
static SFENCE: InstDef = InstDef::new(Mn::SFENCE, &[], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse).cpuid(&cpuid::SSE);
static CLFLUSH: InstDef = InstDef::new(Mn::CLFLUSH, &[mem(B, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::Sse2).cpuid(&cpuid::CLFLUSH);

static G15_S0: ModSelect = ModSelect { mem: Op::Inst(&FXSAVE), reg: ___ };
static G15_S1: ModSelect = ModSelect { mem: Op::Inst(&FXRSTOR), reg: ___ };
static G15_S2: ModSelect = ModSelect { mem: Op::Inst(&LDMXCSR), reg: ___ };
static G15_S3: ModSelect = ModSelect { mem: Op::Inst(&STMXCSR), reg: ___ };
static G15_S4: ModSelect = ModSelect { mem: Op::Inst(&XSAVE), reg: ___ };
static G15_S5: ModSelect = ModSelect { mem: Op::Inst(&XRSTOR), reg: Op::Inst(&LFENCE) };
static G15_S6: ModSelect = ModSelect { mem: ___, reg: Op::Inst(&MFENCE) };
static G15_S7: ModSelect = ModSelect { mem: Op::Inst(&CLFLUSH), reg: Op::Inst(&SFENCE) };

static GRP15: GroupSelect = GroupSelect {
    slots: [
        Op::ModSplit(&G15_S0), Op::ModSplit(&G15_S1), Op::ModSplit(&G15_S2), Op::ModSplit(&G15_S3),
        Op::ModSplit(&G15_S4), Op::ModSplit(&G15_S5), Op::ModSplit(&G15_S6), Op::ModSplit(&G15_S7),
    ],
};

// 0FB0-0FBF.

static CMPXCHG_EB: InstDef = InstDef::new(Mn::CMPXCHG, &[rm(B, ReadWrite), reg(B, Read)], f::CMPXCHG, M::ANY, PS::LOCKABLE, C::Semaphore, S::I486)
    .implicit(&[fixed(0, B, ReadCondWrite)]);
static CMPXCHG_EV: InstDef = InstDef::new(Mn::CMPXCHG, &[rm(V, ReadWrite), reg(V, Read)], f::CMPXCHG, M::ANY, PS::LOCKABLE, C::Semaphore, S::I486)
    .implicit(&[fixed(0, V, ReadCondWrite)]);
static LSS: InstDef = InstDef::new(Mn::LSS, &[reg(V, Write), mem(P, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I386)
    .implicit(&[od(OpSpec::FixedSeg(2), W, Write)]);
static BTR_EV_GV: InstDef = InstDef::new(Mn::BTR, &[od(OpSpec::RmGpBitBase, V, ReadWrite), reg(V, Read)], f::BIT_TEST, M::ANY, PS::LOCKABLE, C::Bit, S::I386);
static LFS: InstDef = InstDef::new(Mn::LFS, &[reg(V, Write), mem(P, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I386)
    .implicit(&[od(OpSpec::FixedSeg(4), W, Write)]);
static LGS: InstDef = InstDef::new(Mn::LGS, &[reg(V, Write), mem(P, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I386)
    .implicit(&[od(OpSpec::FixedSeg(5), W, Write)]);
static MOVZX_GV_EB: InstDef = InstDef::new(Mn::MOVZX, &[reg(V, Write), rm(B, Read)], f::NONE, M::ANY, PS::NONE, C::Widen, S::I386);
static MOVZX_GV_EW: InstDef = InstDef::new(Mn::MOVZX, &[reg(V, Write), rm(W, Read)], f::NONE, M::ANY, PS::NONE, C::Widen, S::I386);
static POPCNT: InstDef = InstDef::new(Mn::POPCNT, &[reg(V, Write), rm(V, Read)], f::CNT, M::ANY, PS::NONE, C::Bit, S::Popcnt).cpuid(&cpuid::POPCNT);
static UD1: InstDef = InstDef::new(Mn::UD1, &[reg(V, Read), rm(V, Read)], f::NONE, M::ANY, PS::NONE, C::Misc, S::I186);

static PS_B8: PrefixSelect = PrefixSelect { none: ___, p66: ___, pf3: Op::Inst(&POPCNT), pf2: ___ };

static BT_EV_IB: InstDef = InstDef::new(Mn::BT, &[od(OpSpec::RmGpBitBase, V, Read), imm(B)], f::BIT_TEST, M::ANY, PS::NONE, C::Bit, S::I386);
static BTS_EV_IB: InstDef = InstDef::new(Mn::BTS, &[od(OpSpec::RmGpBitBase, V, ReadWrite), imm(B)], f::BIT_TEST, M::ANY, PS::LOCKABLE, C::Bit, S::I386);
static BTR_EV_IB: InstDef = InstDef::new(Mn::BTR, &[od(OpSpec::RmGpBitBase, V, ReadWrite), imm(B)], f::BIT_TEST, M::ANY, PS::LOCKABLE, C::Bit, S::I386);
static BTC_EV_IB: InstDef = InstDef::new(Mn::BTC, &[od(OpSpec::RmGpBitBase, V, ReadWrite), imm(B)], f::BIT_TEST, M::ANY, PS::LOCKABLE, C::Bit, S::I386);

static GRP8: GroupSelect = GroupSelect {
    slots: [
        ___, ___, ___, ___,
        Op::Inst(&BT_EV_IB), Op::Inst(&BTS_EV_IB), Op::Inst(&BTR_EV_IB), Op::Inst(&BTC_EV_IB),
    ],
};

static BTC_EV_GV: InstDef = InstDef::new(Mn::BTC, &[od(OpSpec::RmGpBitBase, V, ReadWrite), reg(V, Read)], f::BIT_TEST, M::ANY, PS::LOCKABLE, C::Bit, S::I386);
static BSF: InstDef = InstDef::new(Mn::BSF, &[reg(V, Write), rm(V, Read)], f::BIT_SCAN, M::ANY, PS::NONE, C::Bit, S::I386);
static TZCNT: InstDef = InstDef::new(Mn::TZCNT, &[reg(V, Write), rm(V, Read)], f::CNT, M::ANY, PS::NONE, C::Bit, S::Bmi1).cpuid(&cpuid::BMI1);
static BSR: InstDef = InstDef::new(Mn::BSR, &[reg(V, Write), rm(V, Read)], f::BIT_SCAN, M::ANY, PS::NONE, C::Bit, S::I386);
static LZCNT: InstDef = InstDef::new(Mn::LZCNT, &[reg(V, Write), rm(V, Read)], f::CNT, M::ANY, PS::NONE, C::Bit, S::Lzcnt).cpuid(&cpuid::LZCNT);
static MOVSX_GV_EB: InstDef = InstDef::new(Mn::MOVSX, &[reg(V, Write), rm(B, Read)], f::NONE, M::ANY, PS::NONE, C::Widen, S::I386);
static MOVSX_GV_EW: InstDef = InstDef::new(Mn::MOVSX, &[reg(V, Write), rm(W, Read)], f::NONE, M::ANY, PS::NONE, C::Widen, S::I386);

static PS_BC: PrefixSelect = PrefixSelect { none: Op::Inst(&BSF), p66: ___, pf3: Op::Inst(&TZCNT), pf2: ___ };
static PS_BD: PrefixSelect = PrefixSelect { none: Op::Inst(&BSR), p66: ___, pf3: Op::Inst(&LZCNT), pf2: ___ };

// 0FC0-0FCF.

static XADD_EB: InstDef = InstDef::new(Mn::XADD, &[rm(B, ReadWrite), reg(B, ReadWrite)], f::ARITH, M::ANY, PS::LOCKABLE, C::Semaphore, S::I486);
static XADD_EV: InstDef = InstDef::new(Mn::XADD, &[rm(V, ReadWrite), reg(V, ReadWrite)], f::ARITH, M::ANY, PS::LOCKABLE, C::Semaphore, S::I486);
static MOVNTI: InstDef = InstDef::new(Mn::MOVNTI, &[mem(V, Write), reg(V, Read)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::Sse2).cpuid(&cpuid::SSE2);

static CMPXCHG8B: InstDef = InstDef::new(Mn::CMPXCHG8B, &[mem(Q, ReadWrite)], f::CMPXCHG8B, M::ANY, PS::LOCKABLE, C::Semaphore, S::Pentium)
    .implicit(&[fixed(0, D, ReadCondWrite), fixed(2, D, ReadCondWrite), fixed(3, D, Read), fixed(1, D, Read)])
    .cpuid(&cpuid::CX8);
static CMPXCHG16B: InstDef = InstDef::new(Mn::CMPXCHG16B, &[mem(DQ, ReadWrite)], f::CMPXCHG8B, M::LONG_ONLY, PS::LOCKABLE, C::Semaphore, S::LongMode)
    .implicit(&[fixed(0, Q, ReadCondWrite), fixed(2, Q, ReadCondWrite), fixed(3, Q, Read), fixed(1, Q, Read)])
    .cpuid(&cpuid::CX16);
static VMPTRLD: InstDef = InstDef::new(Mn::VMPTRLD, &[mem(Q, Read)], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMCLEAR: InstDef = InstDef::new(Mn::VMCLEAR, &[mem(Q, ReadWrite)], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMXON: InstDef = InstDef::new(Mn::VMXON, &[mem(Q, Read)], f::VMX, M::PROT_PRIV, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static VMPTRST: InstDef = InstDef::new(Mn::VMPTRST, &[mem(Q, Write)], f::VMX, M::VMX, PS::NONE, C::Vmx, S::Vmx).cpuid(&cpuid::VMX);
static RDRAND: InstDef = InstDef::new(Mn::RDRAND, &[rm(V, Write)], f::RDRAND, M::ANY, PS::NONE, C::Misc, S::Rdrand).cpuid(&cpuid::RDRAND);
static RDSEED: InstDef = InstDef::new(Mn::RDSEED, &[rm(V, Write)], f::RDRAND, M::ANY, PS::NONE, C::Misc, S::Rdseed).cpuid(&cpuid::RDSEED);

static G9_W1: WSelect = WSelect { w0: Op::Inst(&CMPXCHG8B), w1: Op::Inst(&CMPXCHG16B) };
static G9_S1: ModSelect = ModSelect { mem: Op::W(&G9_W1), reg: ___ };
static G9_MEM6: PrefixSelect = PrefixSelect { none: Op::Inst(&VMPTRLD), p66: Op::Inst(&VMCLEAR), pf3: Op::Inst(&VMXON), pf2: ___ };
static G9_S6: ModSelect = ModSelect { mem: Op::Pfx(&G9_MEM6), reg: Op::Inst(&RDRAND) };
static G9_S7: ModSelect = ModSelect { mem: Op::Inst(&VMPTRST), reg: Op::Inst(&RDSEED) };

static GRP9: GroupSelect = GroupSelect {
    slots: [
        ___, Op::ModSplit(&G9_S1), ___, ___,
        ___, ___, Op::ModSplit(&G9_S6), Op::ModSplit(&G9_S7),
    ],
};

static BSWAP: InstDef = InstDef::new(Mn::BSWAP, &[opreg(V, ReadWrite)], f::NONE, M::ANY, PS::NONE, C::DataTransfer, S::I486);

// 0FD6, 0FEF.

static PS_D6: PrefixSelect = PrefixSelect { none: ___, p66: Op::Inst(&MOVQ_W_V), pf3: ___, pf2: ___ };

static PXOR_P_Q: InstDef = InstDef::new(Mn::PXOR, &[od(OpSpec::RegMm, Q, ReadWrite), od(OpSpec::RmMm, Q, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Mmx).cpuid(&cpuid::MMX);
static PXOR_V_W: InstDef = InstDef::new(Mn::PXOR, &[xreg(X, ReadWrite), xrm(X, Read)], f::NONE, M::ANY, PS::NONE, C::Sse, S::Sse2).cpuid(&cpuid::SSE2);
static PS_EF: PrefixSelect = PrefixSelect { none: Op::Inst(&PXOR_P_Q), p66: Op::Inst(&PXOR_V_W), pf3: ___, pf2: ___ };

#[rustfmt::skip]
pub(crate) static MAP: [Op; 256] = [
    // 0x00
    Op::Grp(&GRP6), Op::Grp(&GRP7), Op::Inst(&LAR), Op::Inst(&LSL),
    ___, Op::Inst(&SYSCALL), Op::Inst(&CLTS), Op::Inst(&SYSRET),
    Op::Inst(&INVD), Op::Inst(&WBINVD), ___, Op::Inst(&UD2),
    ___, ___, ___, ___,
    // 0x10
    Op::Pfx(&PS_10), Op::Pfx(&PS_11), ___, ___, ___, ___, ___, ___,
    Op::Grp(&GRP16), ___, ___, ___, ___, ___, ___, Op::Inst(&NOP_EV),
    // 0x20
    Op::Inst(&MOV_R_CR), Op::Inst(&MOV_R_DR), Op::Inst(&MOV_CR_R), Op::Inst(&MOV_DR_R),
    ___, ___, ___, ___,
    Op::Pfx(&PS_28), Op::Pfx(&PS_29), ___, ___, ___, ___, Op::Pfx(&PS_2E), Op::Pfx(&PS_2F),
    // 0x30
    Op::Inst(&WRMSR), Op::Inst(&RDTSC), Op::Inst(&RDMSR), Op::Inst(&RDPMC),
    Op::Inst(&SYSENTER), Op::Inst(&SYSEXIT), ___, ___,
    Op::Esc(Escape::Of38), ___, Op::Esc(Escape::Of3a), ___, ___, ___, ___, ___,
    // 0x40
    Op::Inst(&CMOVO), Op::Inst(&CMOVNO), Op::Inst(&CMOVB), Op::Inst(&CMOVNB),
    Op::Inst(&CMOVZ), Op::Inst(&CMOVNZ), Op::Inst(&CMOVNA), Op::Inst(&CMOVA),
    Op::Inst(&CMOVS), Op::Inst(&CMOVNS), Op::Inst(&CMOVP), Op::Inst(&CMOVNP),
    Op::Inst(&CMOVL), Op::Inst(&CMOVGE), Op::Inst(&CMOVLE), Op::Inst(&CMOVG),
    // 0x50
    ___, ___, ___, ___,
    Op::Pfx(&PS_54), Op::Pfx(&PS_55), Op::Pfx(&PS_56), Op::Pfx(&PS_57),
    Op::Pfx(&PS_58), Op::Pfx(&PS_59), ___, ___,
    Op::Pfx(&PS_5C), ___, Op::Pfx(&PS_5E), ___,
    // 0x60
    ___, ___, ___, ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___, ___, Op::Pfx(&PS_6E), Op::Pfx(&PS_6F),
    // 0x70
    ___, ___, ___, ___, ___, ___, ___, ___,
    Op::Inst(&VMREAD), Op::Inst(&VMWRITE), ___, ___, ___, ___, Op::Pfx(&PS_7E), Op::Pfx(&PS_7F),
    // 0x80
    Op::Inst(&JO_JZ), Op::Inst(&JNO_JZ), Op::Inst(&JB_JZ), Op::Inst(&JNB_JZ),
    Op::Inst(&JZ_JZ), Op::Inst(&JNZ_JZ), Op::Inst(&JNA_JZ), Op::Inst(&JA_JZ),
    Op::Inst(&JS_JZ), Op::Inst(&JNS_JZ), Op::Inst(&JP_JZ), Op::Inst(&JNP_JZ),
    Op::Inst(&JL_JZ), Op::Inst(&JGE_JZ), Op::Inst(&JLE_JZ), Op::Inst(&JG_JZ),
    // 0x90
    Op::Inst(&SETO), Op::Inst(&SETNO), Op::Inst(&SETB), Op::Inst(&SETAE),
    Op::Inst(&SETZ), Op::Inst(&SETNZ), Op::Inst(&SETBE), Op::Inst(&SETA),
    Op::Inst(&SETS), Op::Inst(&SETNS), Op::Inst(&SETP), Op::Inst(&SETNP),
    Op::Inst(&SETL), Op::Inst(&SETGE), Op::Inst(&SETLE), Op::Inst(&SETG),
    // 0xa0
    Op::Inst(&PUSH_FS), Op::Inst(&POP_FS), Op::Inst(&CPUID), Op::Inst(&BT_EV_GV),
    Op::Inst(&SHLD_IB), Op::Inst(&SHLD_CL), ___, ___,
    Op::Inst(&PUSH_GS), Op::Inst(&POP_GS), Op::Inst(&RSM), Op::Inst(&BTS_EV_GV),
    Op::Inst(&SHRD_IB), Op::Inst(&SHRD_CL), Op::Grp(&GRP15), Op::Inst(&IMUL_GV_EV),
    // 0xb0
    Op::Inst(&CMPXCHG_EB), Op::Inst(&CMPXCHG_EV), Op::Inst(&LSS), Op::Inst(&BTR_EV_GV),
    Op::Inst(&LFS), Op::Inst(&LGS), Op::Inst(&MOVZX_GV_EB), Op::Inst(&MOVZX_GV_EW),
    Op::Pfx(&PS_B8), Op::Inst(&UD1), Op::Grp(&GRP8), Op::Inst(&BTC_EV_GV),
    Op::Pfx(&PS_BC), Op::Pfx(&PS_BD), Op::Inst(&MOVSX_GV_EB), Op::Inst(&MOVSX_GV_EW),
    // 0xc0
    Op::Inst(&XADD_EB), Op::Inst(&XADD_EV), ___, Op::Inst(&MOVNTI),
    ___, ___, ___, Op::Grp(&GRP9),
    Op::Inst(&BSWAP), Op::Inst(&BSWAP), Op::Inst(&BSWAP), Op::Inst(&BSWAP),
    Op::Inst(&BSWAP), Op::Inst(&BSWAP), Op::Inst(&BSWAP), Op::Inst(&BSWAP),
    // 0xd0
    ___, ___, ___, ___, ___, ___, Op::Pfx(&PS_D6), ___,
    ___, ___, ___, ___, ___, ___, ___, ___,
    // 0xe0
    ___, ___, ___, ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___, ___, ___, Op::Pfx(&PS_EF),
    // 0xf0
    ___, ___, ___, ___, ___, ___, ___, ___,
    ___, ___, ___, ___, ___, ___, ___, ___,
];
