//! Flag-access classification.
//!
//! Every instruction definition carries a static table of the flags it
//! touches and how. Decoding projects that table onto the record untouched:
//! a flag absent from the definition's table is absent from the summary, and
//! no flag *values* are computed here (that is the emulating consumer's job).

/// An architectural flag, including the x87 condition codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Flag {
    Cf,
    Pf,
    Af,
    Zf,
    Sf,
    Tf,
    If,
    Df,
    Of,
    Iopl,
    Nt,
    Rf,
    Vm,
    Ac,
    Vif,
    Vip,
    Id,
    /// x87 condition code bits in the status word.
    C0,
    C1,
    C2,
    C3,
}

impl Flag {
    const COUNT: usize = 21;

    #[inline]
    fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// How an instruction interacts with one flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlagAccess {
    /// Read as an input.
    Tested,
    /// Read as an input and written by the result (ADC/SBB carry, RCL, ...).
    TestedModified,
    /// Written according to the result.
    Modified,
    /// Unconditionally written to 1.
    Set,
    /// Unconditionally written to 0.
    Cleared,
    /// Left in an architecturally undefined state.
    Undefined,
}

impl FlagAccess {
    #[inline]
    fn reads(self) -> bool {
        matches!(self, FlagAccess::Tested | FlagAccess::TestedModified)
    }

    #[inline]
    fn writes(self) -> bool {
        !matches!(self, FlagAccess::Tested)
    }
}

/// A set of flags, for the summary accessors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FlagSet(u32);

impl FlagSet {
    pub const EMPTY: FlagSet = FlagSet(0);

    #[inline]
    pub fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Flag> {
        FLAG_ORDER.iter().copied().filter(move |f| self.contains(*f))
    }

    #[inline]
    fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }
}

static FLAG_ORDER: [Flag; Flag::COUNT] = [
    Flag::Cf,
    Flag::Pf,
    Flag::Af,
    Flag::Zf,
    Flag::Sf,
    Flag::Tf,
    Flag::If,
    Flag::Df,
    Flag::Of,
    Flag::Iopl,
    Flag::Nt,
    Flag::Rf,
    Flag::Vm,
    Flag::Ac,
    Flag::Vif,
    Flag::Vip,
    Flag::Id,
    Flag::C0,
    Flag::C1,
    Flag::C2,
    Flag::C3,
];

/// The per-flag effects of one decoded instruction.
///
/// This is a view over the definition's static table, so constructing it is
/// free and the summary can never disagree with the tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FlagsSummary {
    effects: &'static [(Flag, FlagAccess)],
}

impl FlagsSummary {
    pub const EMPTY: FlagsSummary = FlagsSummary { effects: &[] };

    pub(crate) const fn new(effects: &'static [(Flag, FlagAccess)]) -> Self {
        FlagsSummary { effects }
    }

    /// The access for one flag, or `None` if the instruction leaves it alone.
    pub fn get(&self, flag: Flag) -> Option<FlagAccess> {
        self.effects.iter().find(|(f, _)| *f == flag).map(|(_, a)| *a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Flag, FlagAccess)> + '_ {
        self.effects.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Flags read as inputs.
    pub fn tested(&self) -> FlagSet {
        self.collect(FlagAccess::reads)
    }

    /// Flags written in any way, including to an undefined state.
    pub fn written(&self) -> FlagSet {
        self.collect(FlagAccess::writes)
    }

    /// Flags written according to the result.
    pub fn modified(&self) -> FlagSet {
        self.collect(|a| matches!(a, FlagAccess::Modified | FlagAccess::TestedModified))
    }

    /// Flags unconditionally written to 1.
    pub fn set_to_one(&self) -> FlagSet {
        self.collect(|a| a == FlagAccess::Set)
    }

    /// Flags unconditionally written to 0.
    pub fn cleared(&self) -> FlagSet {
        self.collect(|a| a == FlagAccess::Cleared)
    }

    /// Flags left architecturally undefined.
    pub fn undefined(&self) -> FlagSet {
        self.collect(|a| a == FlagAccess::Undefined)
    }

    fn collect(&self, pred: impl Fn(FlagAccess) -> bool) -> FlagSet {
        let mut set = FlagSet::EMPTY;
        for (flag, access) in self.effects {
            if pred(*access) {
                set.insert(*flag);
            }
        }
        set
    }
}

/// Shared effect tables referenced by the generated instruction definitions.
///
/// Groupings follow the SDM flag tables; an instruction with an effect
/// pattern of its own gets its own slice next to its definition instead.
pub(crate) mod effect {
    use super::Flag::*;
    use super::FlagAccess::*;
    use super::{Flag, FlagAccess};

    pub type Effects = &'static [(Flag, FlagAccess)];

    pub static NONE: Effects = &[];

    /// ADD/SUB/CMP/NEG and friends: everything is a result.
    pub static ARITH: Effects = &[
        (Of, Modified),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Modified),
        (Pf, Modified),
        (Cf, Modified),
    ];

    /// ADC/SBB: as ARITH but carry is also an input.
    pub static ARITH_CARRY: Effects = &[
        (Of, Modified),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Modified),
        (Pf, Modified),
        (Cf, TestedModified),
    ];

    /// AND/OR/XOR/TEST: carry and overflow forced clear, AF undefined.
    pub static LOGIC: Effects = &[
        (Of, Cleared),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Undefined),
        (Pf, Modified),
        (Cf, Cleared),
    ];

    /// INC/DEC: everything but carry.
    pub static INC_DEC: Effects = &[
        (Of, Modified),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Modified),
        (Pf, Modified),
    ];

    /// SHL/SHR/SAR: OF defined only for 1-bit shifts, AF undefined.
    pub static SHIFT: Effects = &[
        (Of, Undefined),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Undefined),
        (Pf, Modified),
        (Cf, Modified),
    ];

    /// ROL/ROR: only carry and (for 1-bit forms) overflow.
    pub static ROTATE: Effects = &[(Of, Undefined), (Cf, Modified)];

    /// RCL/RCR rotate through carry.
    pub static ROTATE_CARRY: Effects = &[(Of, Undefined), (Cf, TestedModified)];

    /// MUL/IMUL: CF/OF meaningful, the rest undefined.
    pub static MUL: Effects = &[
        (Of, Modified),
        (Sf, Undefined),
        (Zf, Undefined),
        (Af, Undefined),
        (Pf, Undefined),
        (Cf, Modified),
    ];

    /// DIV/IDIV leave everything undefined.
    pub static DIV: Effects = &[
        (Of, Undefined),
        (Sf, Undefined),
        (Zf, Undefined),
        (Af, Undefined),
        (Pf, Undefined),
        (Cf, Undefined),
    ];

    /// BT/BTS/BTR/BTC.
    pub static BIT_TEST: Effects = &[(Of, Undefined), (Sf, Undefined), (Af, Undefined), (Pf, Undefined), (Cf, Modified)];

    /// BSF/BSR.
    pub static BIT_SCAN: Effects = &[
        (Of, Undefined),
        (Sf, Undefined),
        (Zf, Modified),
        (Af, Undefined),
        (Pf, Undefined),
        (Cf, Undefined),
    ];

    /// TZCNT/LZCNT/POPCNT redefine the undefined BSF/BSR pattern.
    pub static CNT: Effects = &[
        (Of, Cleared),
        (Sf, Cleared),
        (Zf, Modified),
        (Af, Cleared),
        (Pf, Cleared),
        (Cf, Modified),
    ];

    /// COMISS/UCOMISS/COMISD and FCOMI: a compare into ZF/PF/CF.
    pub static SSE_COMPARE: Effects = &[
        (Of, Cleared),
        (Sf, Cleared),
        (Zf, Modified),
        (Af, Cleared),
        (Pf, Modified),
        (Cf, Modified),
    ];

    /// FCOMI/FUCOMI also clear C1 on stack-fault-free operation.
    pub static FCOMI: Effects = &[
        (Of, Cleared),
        (Sf, Cleared),
        (Zf, Modified),
        (Af, Cleared),
        (Pf, Modified),
        (Cf, Modified),
        (C1, Cleared),
    ];

    /// Plain x87 arithmetic: C1 reports rounding, C0/C2/C3 undefined.
    pub static X87_ARITH: Effects =
        &[(C0, Undefined), (C1, Modified), (C2, Undefined), (C3, Undefined)];

    /// FCOM/FUCOM family: condition codes are the result.
    pub static X87_COMPARE: Effects =
        &[(C0, Modified), (C1, Cleared), (C2, Modified), (C3, Modified)];

    /// FXAM/FTST style examination.
    pub static X87_EXAMINE: Effects =
        &[(C0, Modified), (C1, Modified), (C2, Modified), (C3, Modified)];

    /// String ops test the direction flag.
    pub static STRING: Effects = &[(Df, Tested)];

    /// CMPS/SCAS: direction in, arithmetic result out.
    pub static STRING_COMPARE: Effects = &[
        (Df, Tested),
        (Of, Modified),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Modified),
        (Pf, Modified),
        (Cf, Modified),
    ];

    /// Decimal adjust (DAA/DAS/AAA/AAS).
    pub static DECIMAL: Effects = &[
        (Of, Undefined),
        (Sf, Modified),
        (Zf, Modified),
        (Af, TestedModified),
        (Pf, Modified),
        (Cf, TestedModified),
    ];

    pub static CLC: Effects = &[(Cf, Cleared)];
    pub static STC: Effects = &[(Cf, Set)];
    pub static CMC: Effects = &[(Cf, TestedModified)];
    pub static CLD: Effects = &[(Df, Cleared)];
    pub static STD: Effects = &[(Df, Set)];
    pub static CLI: Effects = &[(If, Cleared)];
    pub static STI: Effects = &[(If, Set)];

    /// SAHF loads SF/ZF/AF/PF/CF from AH; LAHF stores them.
    pub static SAHF: Effects = &[
        (Sf, Modified),
        (Zf, Modified),
        (Af, Modified),
        (Pf, Modified),
        (Cf, Modified),
    ];
    pub static LAHF: Effects = &[
        (Sf, Tested),
        (Zf, Tested),
        (Af, Tested),
        (Pf, Tested),
        (Cf, Tested),
    ];

    /// POPF/IRET rewrite the whole flags image.
    pub static WRITE_ALL: Effects = &[
        (Cf, Modified),
        (Pf, Modified),
        (Af, Modified),
        (Zf, Modified),
        (Sf, Modified),
        (Tf, Modified),
        (If, Modified),
        (Df, Modified),
        (Of, Modified),
        (Nt, Modified),
        (Rf, Modified),
        (Ac, Modified),
        (Id, Modified),
    ];

    /// PUSHF reads the whole flags image.
    pub static READ_ALL: Effects = &[
        (Cf, Tested),
        (Pf, Tested),
        (Af, Tested),
        (Zf, Tested),
        (Sf, Tested),
        (Tf, Tested),
        (If, Tested),
        (Df, Tested),
        (Of, Tested),
        (Iopl, Tested),
        (Nt, Tested),
        (Ac, Tested),
        (Id, Tested),
    ];

    /// ADCX: carry only. ADOX: overflow only.
    pub static ADCX: Effects = &[(Cf, TestedModified)];
    pub static ADOX: Effects = &[(Of, TestedModified)];

    /// CMPXCHG writes ZF (and the arithmetic flags of the compare).
    pub static CMPXCHG: Effects = &[
        (Of, Modified),
        (Sf, Modified),
        (Zf, Modified),
        (Af, Modified),
        (Pf, Modified),
        (Cf, Modified),
    ];

    /// CMPXCHG8B/16B only define ZF.
    pub static CMPXCHG8B: Effects = &[(Zf, Modified)];

    /// RDRAND/RDSEED signal validity in CF and zero the rest.
    pub static RDRAND: Effects = &[
        (Of, Cleared),
        (Sf, Cleared),
        (Zf, Cleared),
        (Af, Cleared),
        (Pf, Cleared),
        (Cf, Modified),
    ];

    /// VMX instructions report status through CF and ZF, clearing the rest.
    pub static VMX: Effects = &[
        (Of, Cleared),
        (Sf, Cleared),
        (Zf, Modified),
        (Af, Cleared),
        (Pf, Cleared),
        (Cf, Modified),
    ];

    /// LAR/LSL/VERR/VERW report through ZF alone.
    pub static ZF_ONLY: Effects = &[(Zf, Modified)];

    /// ARPL.
    pub static ARPL: Effects = &[(Zf, Modified)];

    /// Condition tests, by condition code. Jcc/SETcc/CMOVcc/LOOPcc share
    /// these; the "not" forms test the same flags.
    pub static COND_O: Effects = &[(Of, Tested)];
    pub static COND_B: Effects = &[(Cf, Tested)];
    pub static COND_Z: Effects = &[(Zf, Tested)];
    pub static COND_BE: Effects = &[(Cf, Tested), (Zf, Tested)];
    pub static COND_S: Effects = &[(Sf, Tested)];
    pub static COND_P: Effects = &[(Pf, Tested)];
    pub static COND_L: Effects = &[(Sf, Tested), (Of, Tested)];
    pub static COND_LE: Effects = &[(Zf, Tested), (Sf, Tested), (Of, Tested)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_a_projection() {
        let summary = FlagsSummary::new(effect::ARITH_CARRY);
        assert_eq!(summary.get(Flag::Cf), Some(FlagAccess::TestedModified));
        assert_eq!(summary.get(Flag::Zf), Some(FlagAccess::Modified));
        assert_eq!(summary.get(Flag::Df), None);

        assert!(summary.tested().contains(Flag::Cf));
        assert!(!summary.tested().contains(Flag::Zf));
        assert!(summary.written().contains(Flag::Cf));
        assert!(summary.modified().contains(Flag::Of));
    }

    #[test]
    fn untouched_flags_never_appear() {
        let summary = FlagsSummary::new(effect::CLD);
        let touched: Vec<_> = summary.iter().collect();
        assert_eq!(touched, vec![(Flag::Df, FlagAccess::Cleared)]);
        assert!(summary.tested().is_empty());
        assert!(summary.cleared().contains(Flag::Df));
        assert!(!summary.written().contains(Flag::Cf));
    }

    #[test]
    fn set_and_clear_are_writes() {
        let sti = FlagsSummary::new(effect::STI);
        assert!(sti.written().contains(Flag::If));
        assert!(sti.set_to_one().contains(Flag::If));
        assert!(sti.cleared().is_empty());

        let shift = FlagsSummary::new(effect::SHIFT);
        assert!(shift.undefined().contains(Flag::Of));
        assert!(shift.undefined().contains(Flag::Af));
    }
}
