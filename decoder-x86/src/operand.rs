//! Concrete operands as they appear on a decoded record.
//!
//! The resolver turns the definition's operand templates into these. Every
//! operand is self-contained: register identity and width, or a fully
//! composed memory reference (segment, base, index, scale, displacement,
//! special-case flags), or a materialized immediate. The introspection layer
//! reads addresses and access modes straight off this without another pass
//! over the bytes.

/// An `x86` register: its number and the bank it lives in.
///
/// ```
/// use x86::{RegSpec, RegisterClass};
///
/// assert_eq!(RegSpec::ecx().num(), 1);
/// assert_eq!(RegSpec::ecx().class(), RegisterClass::GeneralPurpose);
/// assert_eq!(RegSpec::ecx().width(), 4);
/// ```
#[derive(Copy, Clone, Debug, PartialOrd, Ord, Eq, PartialEq, Hash)]
pub struct RegSpec {
    num: u8,
    bank: RegisterBank,
}

/// The physical register file a [`RegSpec`] selects into.
///
/// Widths are encoded by bank for the general-purpose and vector files, the
/// same way the hardware separates `al`/`ax`/`eax`/`rax`.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialOrd, Ord, Eq, PartialEq, Hash)]
pub enum RegisterBank {
    /// 64-bit general purpose: `rax` .. `r15`.
    Q,
    /// 32-bit general purpose: `eax` .. `r15d`.
    D,
    /// 16-bit general purpose: `ax` .. `r15w`.
    W,
    /// Legacy byte registers: `al`, `cl`, `dl`, `bl`, `ah`, `ch`, `dh`, `bh`.
    B,
    /// Byte registers under a REX-class prefix: `al` .. `r15b` with
    /// `spl`/`bpl`/`sil`/`dil` in place of the high-byte forms.
    rB,
    /// `xmm0` .. `xmm31`.
    X,
    /// `ymm0` .. `ymm31`.
    Y,
    /// `zmm0` .. `zmm31`.
    Z,
    /// AVX-512 mask registers `k0` .. `k7`.
    K,
    /// x87 stack `st(0)` .. `st(7)`.
    ST,
    /// MMX `mm0` .. `mm7`.
    MM,
    /// Segment registers `es`, `cs`, `ss`, `ds`, `fs`, `gs`.
    S,
    /// Control registers `cr0` .. `cr15`.
    CR,
    /// Debug registers `dr0` .. `dr15`.
    DR,
    /// The instruction pointer, as a base for RIP-relative addressing.
    RIP,
    EIP,
    /// The flags register as a pseudo-operand.
    RFlags,
    EFlags,
    Flags,
}

impl RegisterBank {
    /// Register width in bytes.
    pub fn width(self) -> u8 {
        match self {
            RegisterBank::Q | RegisterBank::RIP | RegisterBank::RFlags => 8,
            RegisterBank::D | RegisterBank::EIP | RegisterBank::EFlags => 4,
            RegisterBank::W | RegisterBank::Flags => 2,
            RegisterBank::B | RegisterBank::rB => 1,
            RegisterBank::X => 16,
            RegisterBank::Y => 32,
            RegisterBank::Z => 64,
            RegisterBank::K => 8,
            RegisterBank::ST => 10,
            RegisterBank::MM => 8,
            RegisterBank::S => 2,
            RegisterBank::CR | RegisterBank::DR => 8,
        }
    }

    fn class(self) -> RegisterClass {
        match self {
            RegisterBank::Q
            | RegisterBank::D
            | RegisterBank::W
            | RegisterBank::B
            | RegisterBank::rB => RegisterClass::GeneralPurpose,
            RegisterBank::X | RegisterBank::Y | RegisterBank::Z => RegisterClass::Vector,
            RegisterBank::K => RegisterClass::Mask,
            RegisterBank::ST => RegisterClass::X87,
            RegisterBank::MM => RegisterClass::Mmx,
            RegisterBank::S => RegisterClass::Segment,
            RegisterBank::CR => RegisterClass::Control,
            RegisterBank::DR => RegisterClass::Debug,
            RegisterBank::RIP | RegisterBank::EIP => RegisterClass::InstructionPointer,
            RegisterBank::RFlags | RegisterBank::EFlags | RegisterBank::Flags => {
                RegisterClass::Flags
            }
        }
    }
}

/// Coarse register classification, as the introspection layer sees it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RegisterClass {
    GeneralPurpose,
    Vector,
    Mask,
    Segment,
    Control,
    Debug,
    Flags,
    InstructionPointer,
    X87,
    Mmx,
}

macro_rules! register {
    ($bank:ident, $name:ident => $num:expr, $($tail:tt)+) => {
        #[inline]
        pub const fn $name() -> RegSpec {
            RegSpec { bank: RegisterBank::$bank, num: $num }
        }

        register!($bank, $($tail)*);
    };
    ($bank:ident, $name:ident => $num:expr) => {
        #[inline]
        pub const fn $name() -> RegSpec {
            RegSpec { bank: RegisterBank::$bank, num: $num }
        }
    };
}

#[allow(dead_code)]
impl RegSpec {
    /// The number of this register within its bank.
    #[inline]
    pub fn num(&self) -> u8 {
        self.num
    }

    /// The bank this register selects into; width and file in one.
    #[inline]
    pub fn bank(&self) -> RegisterBank {
        self.bank
    }

    /// The register's class as the introspection layer groups them.
    #[inline]
    pub fn class(&self) -> RegisterClass {
        self.bank.class()
    }

    /// The register's width in bytes.
    #[inline]
    pub fn width(&self) -> u8 {
        self.bank.width()
    }

    #[inline]
    pub(crate) const fn from_parts(num: u8, bank: RegisterBank) -> RegSpec {
        RegSpec { num, bank }
    }

    /// A general-purpose register of `width` bytes. `rex` selects the
    /// uniform byte file (`spl` over `ah`) for width 1.
    pub(crate) fn gp(num: u8, width: u8, rex: bool) -> RegSpec {
        let bank = match width {
            8 => RegisterBank::Q,
            4 => RegisterBank::D,
            2 => RegisterBank::W,
            1 => {
                if rex {
                    RegisterBank::rB
                } else {
                    RegisterBank::B
                }
            }
            _ => unreachable!("gp register width {width}"),
        };
        RegSpec { num, bank }
    }

    /// A vector register of `width` bytes.
    pub(crate) fn vec(num: u8, width: u8) -> RegSpec {
        let bank = match width {
            64 => RegisterBank::Z,
            32 => RegisterBank::Y,
            _ => RegisterBank::X,
        };
        RegSpec { num, bank }
    }

    pub(crate) fn st(num: u8) -> RegSpec {
        RegSpec { num: num & 7, bank: RegisterBank::ST }
    }

    pub(crate) fn mm(num: u8) -> RegSpec {
        RegSpec { num: num & 7, bank: RegisterBank::MM }
    }

    pub(crate) fn mask(num: u8) -> RegSpec {
        RegSpec { num: num & 7, bank: RegisterBank::K }
    }

    pub(crate) fn seg(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::S }
    }

    pub(crate) fn cr(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::CR }
    }

    pub(crate) fn dr(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::DR }
    }

    pub const RIP: RegSpec = RegSpec { num: 0, bank: RegisterBank::RIP };
    pub const EIP: RegSpec = RegSpec { num: 0, bank: RegisterBank::EIP };

    register!(Q,
        rax => 0, rcx => 1, rdx => 2, rbx => 3,
        rsp => 4, rbp => 5, rsi => 6, rdi => 7,
        r8 => 8, r9 => 9, r10 => 10, r11 => 11,
        r12 => 12, r13 => 13, r14 => 14, r15 => 15
    );

    register!(D,
        eax => 0, ecx => 1, edx => 2, ebx => 3,
        esp => 4, ebp => 5, esi => 6, edi => 7,
        r8d => 8, r9d => 9, r10d => 10, r11d => 11,
        r12d => 12, r13d => 13, r14d => 14, r15d => 15
    );

    register!(W,
        ax => 0, cx => 1, dx => 2, bx => 3,
        sp => 4, bp => 5, si => 6, di => 7
    );

    register!(B,
        al => 0, cl => 1, dl => 2, bl => 3,
        ah => 4, ch => 5, dh => 6, bh => 7
    );

    register!(rB,
        spl => 4, bpl => 5, sil => 6, dil => 7,
        r8b => 8, r9b => 9, r10b => 10, r11b => 11,
        r12b => 12, r13b => 13, r14b => 14, r15b => 15
    );

    register!(S,
        es => 0, cs => 1, ss => 2, ds => 3, fs => 4, gs => 5
    );

    #[inline]
    pub const fn xmm(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::X }
    }

    #[inline]
    pub const fn ymm(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::Y }
    }

    #[inline]
    pub const fn zmm(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::Z }
    }

    #[inline]
    pub const fn k(num: u8) -> RegSpec {
        RegSpec { num, bank: RegisterBank::K }
    }
}

/// A segment register by name, for memory operand segmentation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Segment {
    Es,
    Cs,
    Ss,
    Ds,
    Fs,
    Gs,
}

/// How an operand is accessed by the instruction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Access {
    Read,
    Write,
    ReadWrite,
    /// Read only when a condition holds (REP-prefixed string reads, ...).
    CondRead,
    /// Written only when a condition holds (CMOVcc, REP string writes, ...).
    CondWrite,
    /// Read unconditionally, written only when a condition holds.
    ReadCondWrite,
}

impl Access {
    /// Whether the operand may be read at all.
    pub fn may_read(self) -> bool {
        !matches!(self, Access::Write | Access::CondWrite)
    }

    /// Whether the operand may be written at all.
    pub fn may_write(self) -> bool {
        !matches!(self, Access::Read | Access::CondRead)
    }

    /// Whether any access only happens under a runtime condition.
    pub fn is_conditional(self) -> bool {
        matches!(self, Access::CondRead | Access::CondWrite | Access::ReadCondWrite)
    }

    /// The conditional counterpart of this access, for REP'd string forms.
    pub(crate) fn conditional(self) -> Access {
        match self {
            Access::Read => Access::CondRead,
            Access::Write => Access::CondWrite,
            Access::ReadWrite | Access::ReadCondWrite => Access::ReadCondWrite,
            other => other,
        }
    }
}

/// Special-case markers on a memory operand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct MemFlags(u8);

#[allow(dead_code)]
impl MemFlags {
    pub const RIP_RELATIVE: MemFlags = MemFlags(1 << 0);
    /// An implicit stack reference through the stack pointer.
    pub const STACK: MemFlags = MemFlags(1 << 1);
    /// A string-op reference through rSI/rDI.
    pub const STRING: MemFlags = MemFlags(1 << 2);
    /// The displacement is a bit offset base (BT/BTS/BTR/BTC memory forms).
    pub const BIT_BASE: MemFlags = MemFlags(1 << 3);
    /// The index register is a vector of indices (gather/scatter).
    pub const VSIB: MemFlags = MemFlags(1 << 4);
    /// The memory element is broadcast to the full vector width.
    pub const BROADCAST: MemFlags = MemFlags(1 << 5);

    pub const NONE: MemFlags = MemFlags(0);

    pub const fn union(self, other: MemFlags) -> MemFlags {
        MemFlags(self.0 | other.0)
    }

    pub(crate) fn insert(&mut self, other: MemFlags) {
        self.0 |= other.0;
    }

    pub const fn contains(self, other: MemFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A fully composed memory reference.
///
/// `segment` already accounts for overrides and mode rules; `disp` is
/// sign-extended and, for EVEX compressed displacements, already scaled.
/// `disp_width` is the *encoded* width in bytes (what the raw field layout
/// accounts for), not the width of the effective value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MemOperand {
    pub segment: Segment,
    pub base: Option<RegSpec>,
    pub index: Option<RegSpec>,
    pub scale: u8,
    pub disp: i64,
    pub disp_width: u8,
    pub flags: MemFlags,
}

impl MemOperand {
    pub(crate) fn absolute(segment: Segment, disp: i64, disp_width: u8) -> MemOperand {
        MemOperand {
            segment,
            base: None,
            index: None,
            scale: 1,
            disp,
            disp_width,
            flags: MemFlags::NONE,
        }
    }
}

/// The role-discriminated payload of an operand.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum OperandKind {
    /// A register. `count` is 1 except for the multi-register forms that
    /// name a block of consecutive registers.
    Register { reg: RegSpec, count: u8 },

    Memory(MemOperand),

    /// An immediate, sign- or zero-extended per the definition.
    Immediate { value: i64 },

    /// A branch displacement relative to the end of the instruction.
    Relative { offset: i64 },

    /// A direct far pointer (`ptr16:16`/`ptr16:32`), legacy modes only.
    FarPointer { segment: u16, offset: u32 },

    /// The flags register as an operand (PUSHF/POPF/SAHF/...).
    Flags { reg: RegSpec },
}

/// One resolved operand: role payload, access mode, and operand width.
///
/// `width == 0` means the width is not a fixed byte count (address
/// generation with LEA, variable state regions for FXSAVE-class ops).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Operand {
    pub kind: OperandKind,
    pub access: Access,
    pub width: u8,
    /// Operands past the encoded ones: fixed registers, stack references,
    /// string memory and the like.
    pub implicit: bool,
}

impl Operand {
    pub(crate) const NOTHING: Operand = Operand {
        kind: OperandKind::Immediate { value: 0 },
        access: Access::Read,
        width: 0,
        implicit: false,
    };

    pub fn is_memory(&self) -> bool {
        matches!(self.kind, OperandKind::Memory(_))
    }

    pub fn is_register(&self) -> bool {
        matches!(self.kind, OperandKind::Register { .. })
    }

    /// The memory reference, if this operand is one.
    pub fn memory(&self) -> Option<&MemOperand> {
        match &self.kind {
            OperandKind::Memory(mem) => Some(mem),
            _ => None,
        }
    }

    pub fn register(&self) -> Option<RegSpec> {
        match self.kind {
            OperandKind::Register { reg, .. } => Some(reg),
            _ => None,
        }
    }
}

/// An AVX-512 masking decorator: which mask register, and whether masked
/// lanes merge or zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MaskDecorator {
    pub reg: RegSpec,
    pub zeroing: bool,
}

/// An EVEX embedded-broadcast decorator: how many elements the memory
/// source is replicated to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Broadcast {
    To2,
    To4,
    To8,
    To16,
}

/// An EVEX static rounding decorator. Implies exception suppression.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rounding {
    Nearest,
    Down,
    Up,
    Zero,
}

impl Rounding {
    pub(crate) fn from_ll(ll: u8) -> Rounding {
        match ll & 3 {
            0 => Rounding::Nearest,
            1 => Rounding::Down,
            2 => Rounding::Up,
            _ => Rounding::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regspec_identity() {
        assert_eq!(RegSpec::rax().num(), 0);
        assert_eq!(RegSpec::rax().width(), 8);
        assert_eq!(RegSpec::gp(0, 8, false), RegSpec::rax());
        assert_eq!(RegSpec::gp(5, 1, false), RegSpec::ch());
        assert_eq!(RegSpec::gp(5, 1, true), RegSpec::bpl());
        assert_eq!(RegSpec::xmm(3).class(), RegisterClass::Vector);
        assert_eq!(RegSpec::cr(4).class(), RegisterClass::Control);
        assert_eq!(RegSpec::k(2).class(), RegisterClass::Mask);
    }

    #[test]
    fn access_modes() {
        assert!(Access::ReadWrite.may_read());
        assert!(Access::ReadWrite.may_write());
        assert!(!Access::Read.may_write());
        assert!(Access::CondWrite.is_conditional());
        assert_eq!(Access::Write.conditional(), Access::CondWrite);
        assert_eq!(Access::ReadWrite.conditional(), Access::ReadCondWrite);
    }

    #[test]
    fn mem_flags() {
        let mut flags = MemFlags::NONE;
        flags.insert(MemFlags::RIP_RELATIVE);
        assert!(flags.contains(MemFlags::RIP_RELATIVE));
        assert!(!flags.contains(MemFlags::VSIB));
        assert!(MemFlags::STACK.union(MemFlags::STRING).contains(MemFlags::STACK));
    }
}
