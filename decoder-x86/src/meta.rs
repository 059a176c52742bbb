//! Static classification data carried on every instruction definition:
//! the contexts an instruction is architecturally valid in, the prefixes it
//! tolerates, and the category/ISA/CPUID tags the introspection layer keys
//! off of. All of it is advisory output; none of it gates decoding.

/// Bitset of execution contexts an instruction is valid in.
///
/// Mode mismatches are surfaced on the decoded record, not treated as decode
/// failures: the bytes still encode exactly one instruction, the machine just
/// would not run it where the caller claims to be.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ModeSet(u32);

#[allow(dead_code)]
impl ModeSet {
    pub const REAL: ModeSet = ModeSet(1 << 0);
    pub const VIRTUAL8086: ModeSet = ModeSet(1 << 1);
    pub const PROTECTED: ModeSet = ModeSet(1 << 2);
    pub const COMPAT: ModeSet = ModeSet(1 << 3);
    pub const LONG: ModeSet = ModeSet(1 << 4);
    pub const SMM: ModeSet = ModeSet(1 << 5);
    pub const SGX: ModeSet = ModeSet(1 << 6);
    pub const TSX: ModeSet = ModeSet(1 << 7);
    pub const VMX_ROOT: ModeSet = ModeSet(1 << 8);
    pub const VMX_NON_ROOT: ModeSet = ModeSet(1 << 9);
    pub const SEAM: ModeSet = ModeSet(1 << 10);

    pub const RING0: ModeSet = ModeSet(1 << 16);
    pub const RING1: ModeSet = ModeSet(1 << 17);
    pub const RING2: ModeSet = ModeSet(1 << 18);
    pub const RING3: ModeSet = ModeSet(1 << 19);

    pub const EMPTY: ModeSet = ModeSet(0);

    pub const ALL_RINGS: ModeSet =
        Self::RING0.union(Self::RING1).union(Self::RING2).union(Self::RING3);

    const ALL_CONTEXTS: ModeSet = ModeSet(0x7ff);

    /// Valid everywhere. The default for the overwhelming majority of the
    /// instruction set.
    pub const ANY: ModeSet = Self::ALL_CONTEXTS.union(Self::ALL_RINGS);

    /// Ring-0-only system instructions, still valid across every processor
    /// context that has a ring 0.
    pub const PRIV: ModeSet = Self::ALL_CONTEXTS.union(Self::RING0);

    /// Instructions that only exist in 64-bit mode.
    pub const LONG_ONLY: ModeSet = Self::LONG
        .union(Self::SMM)
        .union(Self::SGX)
        .union(Self::TSX)
        .union(Self::VMX_ROOT)
        .union(Self::VMX_NON_ROOT)
        .union(Self::SEAM)
        .union(Self::ALL_RINGS);

    /// Encodings reclaimed by 64-bit mode (AAA, PUSH ES, BOUND, ...).
    pub const LEGACY_ONLY: ModeSet = Self::REAL
        .union(Self::VIRTUAL8086)
        .union(Self::PROTECTED)
        .union(Self::COMPAT)
        .union(Self::SMM)
        .union(Self::ALL_RINGS);

    /// VMX instructions: VMX-root operation (plus SEAM, which implies it).
    pub const VMX: ModeSet = Self::PROTECTED
        .union(Self::LONG)
        .union(Self::COMPAT)
        .union(Self::VMX_ROOT)
        .union(Self::SEAM)
        .union(Self::RING0);

    /// Instructions requiring a protected-style mode (no real/virtual-8086).
    pub const PROT: ModeSet = Self::PROTECTED
        .union(Self::COMPAT)
        .union(Self::LONG)
        .union(Self::SMM)
        .union(Self::SGX)
        .union(Self::TSX)
        .union(Self::VMX_ROOT)
        .union(Self::VMX_NON_ROOT)
        .union(Self::SEAM)
        .union(Self::ALL_RINGS);

    /// Ring-0 forms of the protected-mode system instructions.
    pub const PROT_PRIV: ModeSet = Self::PROTECTED
        .union(Self::COMPAT)
        .union(Self::LONG)
        .union(Self::SMM)
        .union(Self::VMX_ROOT)
        .union(Self::SEAM)
        .union(Self::RING0);

    /// Ring-0, 64-bit only (SWAPGS, SYSRET).
    pub const LONG_PRIV: ModeSet = Self::LONG
        .union(Self::SMM)
        .union(Self::VMX_ROOT)
        .union(Self::VMX_NON_ROOT)
        .union(Self::SEAM)
        .union(Self::RING0);

    pub const fn union(self, other: ModeSet) -> ModeSet {
        ModeSet(self.0 | other.0)
    }

    pub const fn intersect(self, other: ModeSet) -> ModeSet {
        ModeSet(self.0 & other.0)
    }

    pub const fn contains(self, other: ModeSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// Bitset of prefixes an instruction definition tolerates.
///
/// Like [`ModeSet`], this is advisory data copied onto the record, with one
/// exception: a LOCK prefix on a definition without [`PrefixSet::LOCK`] (or
/// on a register destination) encodes no instruction at all and is rejected
/// during decode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrefixSet(u16);

#[allow(dead_code)]
impl PrefixSet {
    pub const LOCK: PrefixSet = PrefixSet(1 << 0);
    pub const REP: PrefixSet = PrefixSet(1 << 1);
    pub const REPNE: PrefixSet = PrefixSet(1 << 2);
    pub const XACQUIRE: PrefixSet = PrefixSet(1 << 3);
    pub const XRELEASE: PrefixSet = PrefixSet(1 << 4);
    pub const BND: PrefixSet = PrefixSet(1 << 5);
    pub const BRANCH_HINT: PrefixSet = PrefixSet(1 << 6);

    pub const NONE: PrefixSet = PrefixSet(0);

    /// Lockable read-modify-write forms also take the HLE prefixes.
    pub const LOCKABLE: PrefixSet = Self::LOCK.union(Self::XACQUIRE).union(Self::XRELEASE);

    /// REP/REPNE string forms.
    pub const REP_ANY: PrefixSet = Self::REP.union(Self::REPNE);

    /// Branches that accept taken/not-taken hints (and BND on near forms).
    pub const BRANCH: PrefixSet = Self::BRANCH_HINT.union(Self::BND);

    pub const fn union(self, other: PrefixSet) -> PrefixSet {
        PrefixSet(self.0 | other.0)
    }

    pub const fn contains(self, other: PrefixSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: PrefixSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn bits(self) -> u16 {
        self.0
    }
}

/// Coarse behavioural grouping, one per definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Category {
    Arith,
    Binary,
    Bit,
    Call,
    CondMov,
    Convert,
    DataTransfer,
    Decimal,
    FlagOp,
    Interrupt,
    Io,
    Jump,
    Logical,
    Nop,
    Pop,
    Push,
    Ret,
    Rotate,
    Semaphore,
    SetCc,
    Shift,
    StringOp,
    System,
    Vmx,
    Widen,
    X87,
    Sse,
    Avx,
    Avx512,
    Misc,
}

/// Instruction-set extension an encoding belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IsaSet {
    I86,
    I186,
    I286,
    I386,
    I486,
    Pentium,
    LongMode,
    X87,
    Cmov,
    Cpuid,
    Msr,
    Tsc,
    Mmx,
    Sse,
    Sse2,
    Sse3,
    Ssse3,
    Sse41,
    Sse42,
    Avx,
    Avx2,
    Avx512F,
    Bmi1,
    Bmi2,
    Adx,
    Movbe,
    Popcnt,
    Lzcnt,
    Vmx,
    Smx,
    Xsave,
    Rdrand,
    Rdseed,
    Fsgsbase,
    Cet,
    Monitor,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CpuidReg {
    Eax,
    Ebx,
    Ecx,
    Edx,
}

/// Where to look to learn whether the host supports an instruction: a CPUID
/// leaf/subleaf, the output register, and the bit within it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CpuidFeature {
    pub leaf: u32,
    pub subleaf: u32,
    pub reg: CpuidReg,
    pub bit: u8,
}

#[allow(dead_code)]
pub mod cpuid {
    use super::{CpuidFeature, CpuidReg};

    const fn leaf1_ecx(bit: u8) -> CpuidFeature {
        CpuidFeature { leaf: 1, subleaf: 0, reg: CpuidReg::Ecx, bit }
    }

    const fn leaf1_edx(bit: u8) -> CpuidFeature {
        CpuidFeature { leaf: 1, subleaf: 0, reg: CpuidReg::Edx, bit }
    }

    const fn leaf7_ebx(bit: u8) -> CpuidFeature {
        CpuidFeature { leaf: 7, subleaf: 0, reg: CpuidReg::Ebx, bit }
    }

    pub static TSC: CpuidFeature = leaf1_edx(4);
    pub static MSR: CpuidFeature = leaf1_edx(5);
    pub static CX8: CpuidFeature = leaf1_edx(8);
    pub static CMOV: CpuidFeature = leaf1_edx(15);
    pub static CLFLUSH: CpuidFeature = leaf1_edx(19);
    pub static MMX: CpuidFeature = leaf1_edx(23);
    pub static FXSR: CpuidFeature = leaf1_edx(24);
    pub static SSE: CpuidFeature = leaf1_edx(25);
    pub static SSE2: CpuidFeature = leaf1_edx(26);

    pub static SSE3: CpuidFeature = leaf1_ecx(0);
    pub static MONITOR: CpuidFeature = leaf1_ecx(3);
    pub static VMX: CpuidFeature = leaf1_ecx(5);
    pub static SMX: CpuidFeature = leaf1_ecx(6);
    pub static SSSE3: CpuidFeature = leaf1_ecx(9);
    pub static CX16: CpuidFeature = leaf1_ecx(13);
    pub static SSE41: CpuidFeature = leaf1_ecx(19);
    pub static SSE42: CpuidFeature = leaf1_ecx(20);
    pub static MOVBE: CpuidFeature = leaf1_ecx(22);
    pub static POPCNT: CpuidFeature = leaf1_ecx(23);
    pub static XSAVE: CpuidFeature = leaf1_ecx(26);
    pub static AVX: CpuidFeature = leaf1_ecx(28);
    pub static RDRAND: CpuidFeature = leaf1_ecx(30);

    pub static FSGSBASE: CpuidFeature = leaf7_ebx(0);
    pub static BMI1: CpuidFeature = leaf7_ebx(3);
    pub static AVX2: CpuidFeature = leaf7_ebx(5);
    pub static BMI2: CpuidFeature = leaf7_ebx(8);
    pub static RDSEED: CpuidFeature = leaf7_ebx(18);
    pub static ADX: CpuidFeature = leaf7_ebx(19);
    pub static AVX512F: CpuidFeature = leaf7_ebx(16);

    pub static LZCNT: CpuidFeature =
        CpuidFeature { leaf: 0x8000_0001, subleaf: 0, reg: CpuidReg::Ecx, bit: 5 };
    pub static RDTSCP: CpuidFeature =
        CpuidFeature { leaf: 0x8000_0001, subleaf: 0, reg: CpuidReg::Edx, bit: 27 };
    pub static LONG_MODE: CpuidFeature =
        CpuidFeature { leaf: 0x8000_0001, subleaf: 0, reg: CpuidReg::Edx, bit: 29 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_set_algebra() {
        assert!(ModeSet::ANY.contains(ModeSet::LONG));
        assert!(ModeSet::ANY.contains(ModeSet::RING3));
        assert!(ModeSet::PRIV.contains(ModeSet::RING0));
        assert!(!ModeSet::PRIV.contains(ModeSet::RING3));
        assert!(!ModeSet::LEGACY_ONLY.contains(ModeSet::LONG));
        assert!(ModeSet::LONG_ONLY.contains(ModeSet::LONG));
        assert!(!ModeSet::LONG_ONLY.contains(ModeSet::PROTECTED));
    }

    #[test]
    fn prefix_set_algebra() {
        assert!(PrefixSet::LOCKABLE.contains(PrefixSet::LOCK));
        assert!(PrefixSet::LOCKABLE.contains(PrefixSet::XRELEASE));
        assert!(!PrefixSet::REP_ANY.contains(PrefixSet::LOCK));
        assert!(!PrefixSet::NONE.contains(PrefixSet::BND));
    }
}
