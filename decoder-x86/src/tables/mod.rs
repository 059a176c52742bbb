//! The static instruction table and its walker.
//!
//! The per-map data files in this directory are emitted offline from the
//! instruction database; the node types and the walk loop here are the only
//! hand-maintained pieces. Adding instructions means regenerating the data,
//! not touching the walker.
//!
//! Every map is a flat 256-entry array indexed by an opcode byte. A slot
//! either terminates in an [`InstDef`] or forwards to another selector:
//! mandatory prefix, ModRM.reg group, ModRM.mod split, ModRM.rm row, CPU
//! mode, effective operand/address size, vector length, W bit, or a deeper
//! map. Resolution is a loop over those selectors, O(1) per level, with no
//! backtracking.

pub(crate) mod evex;
pub(crate) mod groups;
pub(crate) mod one_byte;
pub(crate) mod three_byte;
pub(crate) mod two_byte;
pub(crate) mod vex;
pub(crate) mod x87;

use crate::flags::effect::Effects;
use crate::meta::{Category, CpuidFeature, IsaSet, ModeSet, PrefixSet};
use crate::operand::Access;
use crate::prefix::{Ext, Prefixes};
use crate::{MachineMode, Mnemonic};
use decoder::{Error, ErrorKind, Reader};

/// One instruction definition, as generated from the instruction database.
#[derive(Debug, Copy, Clone)]
pub(crate) struct InstDef {
    pub mnemonic: Mnemonic,
    /// Encoded operands, in encoding order.
    pub operands: &'static [OperandDef],
    /// Operands with no encoding: fixed registers, stack and string memory,
    /// the flags pseudo-register.
    pub implicit: &'static [OperandDef],
    pub flags: Effects,
    pub modes: ModeSet,
    pub prefixes: PrefixSet,
    pub category: Category,
    pub isa: IsaSet,
    pub cpuid: Option<&'static CpuidFeature>,
    /// Element width in bytes for EVEX forms; drives disp8 compression and
    /// broadcast factors. Zero for everything else.
    pub elem_width: u8,
}

impl InstDef {
    pub(crate) const fn new(
        mnemonic: Mnemonic,
        operands: &'static [OperandDef],
        flags: Effects,
        modes: ModeSet,
        prefixes: PrefixSet,
        category: Category,
        isa: IsaSet,
    ) -> InstDef {
        InstDef {
            mnemonic,
            operands,
            implicit: &[],
            flags,
            modes,
            prefixes,
            category,
            isa,
            cpuid: None,
            elem_width: 0,
        }
    }

    pub(crate) const fn implicit(mut self, implicit: &'static [OperandDef]) -> InstDef {
        self.implicit = implicit;
        self
    }

    pub(crate) const fn cpuid(mut self, feature: &'static CpuidFeature) -> InstDef {
        self.cpuid = Some(feature);
        self
    }

    pub(crate) const fn elem(mut self, width: u8) -> InstDef {
        self.elem_width = width;
        self
    }

    pub(crate) fn requires_modrm(&self) -> bool {
        self.operands.iter().any(|op| op.spec.uses_modrm())
    }

    pub(crate) fn uses_vsib(&self) -> bool {
        self.operands.iter().any(|op| matches!(op.spec, OpSpec::RmMemVsib(_)))
    }

    /// Control/debug register moves ignore the mod bits and always behave
    /// register-direct.
    pub(crate) fn forces_direct(&self) -> bool {
        self.operands
            .iter()
            .any(|op| matches!(op.spec, OpSpec::RegCtrl | OpSpec::RegDbg))
    }
}

/// One operand template: where the operand comes from, its size class, and
/// its access mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct OperandDef {
    pub spec: OpSpec,
    pub size: Sz,
    pub access: Access,
}

/// Operand encoding sources. A flat enumeration: each operand of each
/// definition is exactly one of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum OpSpec {
    /// ModRM.rm: general-purpose register or memory.
    RmGp,
    /// ModRM.rm as above, but the memory form is a bit-string base
    /// (BT-family), flagged for the consumer.
    RmGpBitBase,
    /// ModRM.rm: vector register or memory.
    RmVec,
    /// ModRM.rm: MMX register or memory.
    RmMm,
    /// ModRM.rm: memory only; register forms do not encode.
    RmMem,
    /// ModRM.rm: memory with a vector index (gather/scatter).
    RmMemVsib(VsibIndex),
    /// ModRM.reg: general-purpose register.
    RegGp,
    /// ModRM.reg: vector register.
    RegVec,
    /// ModRM.reg: MMX register.
    RegMm,
    /// ModRM.reg: segment register.
    RegSeg,
    /// ModRM.reg: control register.
    RegCtrl,
    /// ModRM.reg: debug register.
    RegDbg,
    /// Register embedded in the low three opcode bits (plus REX.B).
    OpcodeReg,
    /// VEX/EVEX.vvvv: general-purpose register (BMI).
    VvvvGp,
    /// VEX/EVEX.vvvv: vector register.
    VvvvVec,
    /// x87 stack register selected by ModRM.rm.
    StRm,
    /// x87 stack top.
    St0,
    /// Immediate, zero-extended.
    ImmU,
    /// Immediate, sign-extended to the operand width.
    ImmS,
    /// Branch displacement relative to the end of the instruction.
    Rel,
    /// Absolute address-width memory offset (the MOV moffs forms).
    Moffs,
    /// Direct far pointer immediate (`ptr16:16/32`).
    FarImm,
    /// The constant 1 of the one-bit shift forms.
    ImmOne,
    /// A fixed general-purpose register by number; width from the size code.
    FixedGp(u8),
    /// The block of all eight legacy registers (PUSHA/POPA).
    GpBlock,
    /// A fixed segment register by number.
    FixedSeg(u8),
    /// The flags register as a pseudo-operand.
    FlagsReg,
    /// String source DS:[rSI] (override allowed).
    MemSi,
    /// String destination ES:[rDI] (no override).
    MemDi,
    /// Implicit stack cell at SS:[rSP].
    MemStack,
    /// XLAT's DS:[rBX + AL].
    MemXlat,
}

impl OpSpec {
    pub(crate) fn uses_modrm(self) -> bool {
        matches!(
            self,
            OpSpec::RmGp
                | OpSpec::RmGpBitBase
                | OpSpec::RmVec
                | OpSpec::RmMm
                | OpSpec::RmMem
                | OpSpec::RmMemVsib(_)
                | OpSpec::RegGp
                | OpSpec::RegVec
                | OpSpec::RegMm
                | OpSpec::RegSeg
                | OpSpec::RegCtrl
                | OpSpec::RegDbg
                | OpSpec::StRm
        )
    }
}

/// Width of the indices a VSIB form gathers with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum VsibIndex {
    D,
    Q,
}

/// Operand size classes. Fixed widths are in bytes; the lettered classes
/// resolve against the effective operand size, address size, vector length
/// and mode, in the resolver.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Sz {
    /// 1, 2, 4, 8, 10, 16 bytes.
    B,
    W,
    D,
    Q,
    T,
    DQ,
    /// The effective operand size (2/4/8).
    V,
    /// The effective address size (string/loop pointer registers).
    AV,
    /// The effective operand size capped at 4 (immediates, near branches).
    Z,
    /// 4 bytes in legacy modes, 8 in 64-bit mode, prefix-immune.
    Y,
    /// Far pointer: 2-byte selector plus an operand-size offset.
    P,
    /// Stack slot width: 64-bit default in long mode (16 encodable via 66,
    /// 32 not encodable), the operand size elsewhere.
    VQ,
    /// Fixed 64-bit in long mode regardless of prefixes (indirect branch
    /// targets), operand size elsewhere.
    F64,
    /// Vector width: the full vector length, 16 for legacy SSE.
    X,
    /// Address generation only: no bytes are accessed.
    M0,
    /// Variable-size state region (FXSAVE, FLDENV, ...).
    ENV,
    /// BOUND's pair of bounds: twice the operand size.
    A,
}

/// Mandatory-prefix selector: one sub-slot per selecting prefix.
#[derive(Debug, Copy, Clone)]
pub(crate) struct PrefixSelect {
    pub none: OpcodeSlot,
    pub p66: OpcodeSlot,
    pub pf3: OpcodeSlot,
    pub pf2: OpcodeSlot,
}

/// ModRM.reg group (the classic /0../7 opcode extensions).
#[derive(Debug, Copy, Clone)]
pub(crate) struct GroupSelect {
    pub slots: [OpcodeSlot; 8],
}

/// Split on ModRM.mod: memory forms vs register-direct forms.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ModSelect {
    pub mem: OpcodeSlot,
    pub reg: OpcodeSlot,
}

/// Fully ModRM.rm-keyed row (0F01 oddities, x87 register forms).
#[derive(Debug, Copy, Clone)]
pub(crate) struct RmSelect {
    pub slots: [OpcodeSlot; 8],
}

/// Encodings reclaimed or introduced by 64-bit mode.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ModeSelect {
    pub legacy: OpcodeSlot,
    pub long: OpcodeSlot,
}

/// Mnemonic depends on the effective operand size (CBW/CWDE/CDQE, ...).
#[derive(Debug, Copy, Clone)]
pub(crate) struct OszSelect {
    pub o16: OpcodeSlot,
    pub o32: OpcodeSlot,
    pub o64: OpcodeSlot,
}

/// Mnemonic depends on the effective address size (JCXZ family).
#[derive(Debug, Copy, Clone)]
pub(crate) struct AszSelect {
    pub a16: OpcodeSlot,
    pub a32: OpcodeSlot,
    pub a64: OpcodeSlot,
}

/// Mnemonic depends on the vector length (VZEROUPPER/VZEROALL).
#[derive(Debug, Copy, Clone)]
pub(crate) struct VlSelect {
    pub l128: OpcodeSlot,
    pub l256: OpcodeSlot,
    pub l512: OpcodeSlot,
}

/// Mnemonic depends on the W bit (EVEX 32/64-bit element forms).
#[derive(Debug, Copy, Clone)]
pub(crate) struct WSelect {
    pub w0: OpcodeSlot,
    pub w1: OpcodeSlot,
}

/// Escape to a deeper opcode map.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Escape {
    Of,
    Of38,
    Of3a,
}

/// One opcode-map slot.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) enum OpcodeSlot {
    /// Undefined opcode space.
    #[default]
    None,
    /// A byte the prefix scanner owns; unreachable through the walker.
    Prefix,
    Inst(&'static InstDef),
    Pfx(&'static PrefixSelect),
    Grp(&'static GroupSelect),
    ModSplit(&'static ModSelect),
    Rm(&'static RmSelect),
    Mode(&'static ModeSelect),
    Osz(&'static OszSelect),
    Asz(&'static AszSelect),
    Vl(&'static VlSelect),
    W(&'static WSelect),
    Esc(Escape),
}

/// Which prefix the table consumed as a mandatory-prefix selector. That
/// prefix loses its size/repeat meaning for the selected definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Mandatory {
    None,
    Op66,
    RepF3,
    RepF2,
}

/// A successful table walk.
pub(crate) struct Walk {
    pub def: &'static InstDef,
    pub mandatory: Mandatory,
    /// ModRM byte, if group dispatch had to consume it.
    pub modrm: Option<u8>,
    /// Opcode bytes consumed, escape bytes included. Escape-prefix encoded
    /// instructions always have a 1-byte opcode; the map lives in the
    /// prefix.
    pub opcode_len: u8,
    /// The final opcode byte, for opcode-embedded register operands.
    pub last_byte: u8,
}

/// Context the selectors key on.
pub(crate) struct WalkCtx<'p> {
    pub mode: MachineMode,
    pub prefixes: &'p Prefixes,
    /// Effective operand/address sizes before mandatory-prefix consumption.
    pub osz: u8,
    pub asz: u8,
}

#[inline]
fn exhausted(words: &Reader) -> Error {
    Error::new(ErrorKind::BufferTooSmall, words.offset())
}

#[inline]
fn invalid(words: &Reader) -> Error {
    Error::new(ErrorKind::InvalidEncoding, words.offset())
}

fn is_empty(slot: &OpcodeSlot) -> bool {
    matches!(slot, OpcodeSlot::None)
}

pub(crate) fn walk(
    words: &mut Reader,
    ctx: &WalkCtx,
    opcode_byte: u8,
) -> Result<Walk, Error> {
    let mut byte = opcode_byte;
    let mut opcode_len = 1u8;
    let mut modrm: Option<u8> = None;
    let mut mandatory = Mandatory::None;

    let mut slot = match ctx.prefixes.ext() {
        Ext::None => one_byte::MAP[byte as usize],
        Ext::Vex(v) => match v.map {
            1 => vex::MAP1[byte as usize],
            2 => vex::MAP2[byte as usize],
            _ => vex::MAP3[byte as usize],
        },
        // The XOP maps carry no definitions in this table build; the walk
        // below reports the opcode space as undefined.
        Ext::Xop(_) => OpcodeSlot::None,
        Ext::Evex(e) => match e.map {
            1 => evex::MAP1[byte as usize],
            2 => evex::MAP2[byte as usize],
            _ => evex::MAP3[byte as usize],
        },
    };

    loop {
        match slot {
            OpcodeSlot::None | OpcodeSlot::Prefix => return Err(invalid(words)),
            OpcodeSlot::Inst(def) => {
                return Ok(Walk { def, mandatory, modrm, opcode_len, last_byte: byte });
            }
            OpcodeSlot::Esc(escape) => {
                byte = words.next().ok_or_else(|| exhausted(words))?;
                opcode_len += 1;
                slot = match escape {
                    Escape::Of => two_byte::MAP[byte as usize],
                    Escape::Of38 => three_byte::MAP_0F38[byte as usize],
                    Escape::Of3a => three_byte::MAP_0F3A[byte as usize],
                };
            }
            OpcodeSlot::Pfx(select) => {
                // Inside an escape prefix the embedded pp bits are the
                // selector, exactly. For legacy encodings the repeat
                // prefixes outrank 66, and an exact match beats the
                // no-prefix slot.
                if let Some(pp) = ctx.prefixes.ext_pp() {
                    slot = match pp {
                        0 => select.none,
                        1 => select.p66,
                        2 => select.pf3,
                        _ => select.pf2,
                    };
                } else if ctx.prefixes.repnz() && !is_empty(&select.pf2) {
                    mandatory = Mandatory::RepF2;
                    slot = select.pf2;
                } else if ctx.prefixes.rep() && !is_empty(&select.pf3) {
                    mandatory = Mandatory::RepF3;
                    slot = select.pf3;
                } else if ctx.prefixes.operand_size() && !is_empty(&select.p66) {
                    mandatory = Mandatory::Op66;
                    slot = select.p66;
                } else {
                    mandatory = Mandatory::None;
                    slot = select.none;
                }
            }
            OpcodeSlot::Grp(group) => {
                let m = ensure_modrm(words, &mut modrm)?;
                slot = group.slots[((m >> 3) & 7) as usize];
            }
            OpcodeSlot::ModSplit(split) => {
                let m = ensure_modrm(words, &mut modrm)?;
                slot = if m >> 6 == 0b11 { split.reg } else { split.mem };
            }
            OpcodeSlot::Rm(row) => {
                let m = ensure_modrm(words, &mut modrm)?;
                slot = row.slots[(m & 7) as usize];
            }
            OpcodeSlot::Mode(select) => {
                slot = if ctx.mode == MachineMode::Long { select.long } else { select.legacy };
            }
            OpcodeSlot::Osz(select) => {
                slot = match ctx.osz {
                    2 => select.o16,
                    4 => select.o32,
                    _ => select.o64,
                };
            }
            OpcodeSlot::Asz(select) => {
                slot = match ctx.asz {
                    2 => select.a16,
                    4 => select.a32,
                    _ => select.a64,
                };
            }
            OpcodeSlot::Vl(select) => {
                slot = match ctx.prefixes.vector_width() {
                    32 => select.l256,
                    64 => select.l512,
                    _ => select.l128,
                };
            }
            OpcodeSlot::W(select) => {
                slot = if ctx.prefixes.w() { select.w1 } else { select.w0 };
            }
        }
    }
}

/// Group dispatch needs the ModRM byte before the definition is known; it is
/// consumed here and handed through to the ModRM stage.
fn ensure_modrm(words: &mut Reader, modrm: &mut Option<u8>) -> Result<u8, Error> {
    if let Some(m) = *modrm {
        return Ok(m);
    }
    let m = words.next().ok_or_else(|| exhausted(words))?;
    *modrm = Some(m);
    Ok(m)
}

// Shorthands the generated data files are emitted in terms of.

pub(crate) const fn od(spec: OpSpec, size: Sz, access: Access) -> OperandDef {
    OperandDef { spec, size, access }
}

/// ModRM.rm, general purpose.
pub(crate) const fn rm(size: Sz, access: Access) -> OperandDef {
    od(OpSpec::RmGp, size, access)
}

/// ModRM.reg, general purpose.
pub(crate) const fn reg(size: Sz, access: Access) -> OperandDef {
    od(OpSpec::RegGp, size, access)
}

/// ModRM.rm, vector.
pub(crate) const fn xrm(size: Sz, access: Access) -> OperandDef {
    od(OpSpec::RmVec, size, access)
}

/// ModRM.reg, vector.
pub(crate) const fn xreg(size: Sz, access: Access) -> OperandDef {
    od(OpSpec::RegVec, size, access)
}

/// Memory-only ModRM.rm.
pub(crate) const fn mem(size: Sz, access: Access) -> OperandDef {
    od(OpSpec::RmMem, size, access)
}

/// Zero-extended immediate.
pub(crate) const fn imm(size: Sz) -> OperandDef {
    od(OpSpec::ImmU, size, Access::Read)
}

/// Sign-extended immediate.
pub(crate) const fn imms(size: Sz) -> OperandDef {
    od(OpSpec::ImmS, size, Access::Read)
}

/// Relative branch displacement.
pub(crate) const fn rel(size: Sz) -> OperandDef {
    od(OpSpec::Rel, size, Access::Read)
}

/// Opcode-embedded register.
pub(crate) const fn opreg(size: Sz, access: Access) -> OperandDef {
    od(OpSpec::OpcodeReg, size, access)
}

/// Fixed register by number.
pub(crate) const fn fixed(num: u8, size: Sz, access: Access) -> OperandDef {
    od(OpSpec::FixedGp(num), size, access)
}

/// The implicit stack pointer adjustment of push/pop-class instructions.
pub(crate) const RSP_RW: OperandDef = fixed(4, Sz::Y, Access::ReadWrite);

/// The implicit stack cell.
pub(crate) const fn stack(access: Access) -> OperandDef {
    od(OpSpec::MemStack, Sz::VQ, access)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_templates_know_their_encoding() {
        assert!(rm(Sz::V, Access::ReadWrite).spec.uses_modrm());
        assert!(!imm(Sz::B).spec.uses_modrm());
        assert!(!fixed(0, Sz::V, Access::Read).spec.uses_modrm());
        assert!(od(OpSpec::StRm, Sz::T, Access::Read).spec.uses_modrm());
    }
}
