//! # `x86`, a table-driven x86/x64 instruction decode engine
//!
//! Decodes one instruction from a byte buffer into a self-contained
//! [`Instruction`] record: prefixes, mnemonic, raw field layout, concrete
//! operands with access modes, flag effects, and validity data. Built for an
//! introspection engine that must answer, on a trap-handler hot path, which
//! addresses an instruction touches and how.
//!
//! Decoding is a pure function of the input bytes and the declared
//! [`MachineMode`]: no allocation, no retained state, no reads past the
//! buffer end. Errors are the closed [`decoder::ErrorKind`] set; a record is
//! all-or-nothing. Mode and prefix *validity* are advisory data on a
//! successful record, never decode failures.
//!
//! ```
//! use decoder::Decoded;
//!
//! let decoder = x86::Decoder::long();
//! // add dword [rbx + rcx*4 + 0x10], eax
//! let instr = decoder.decode_slice(&[0x01, 0x44, 0x8b, 0x10]).unwrap();
//!
//! assert_eq!(instr.mnemonic(), x86::Mnemonic::ADD);
//! assert_eq!(instr.len(), 4);
//! let mem = instr.operand(0).memory().copied().unwrap();
//! assert_eq!(mem.base, Some(x86::RegSpec::rbx()));
//! assert_eq!(mem.scale, 4);
//! ```

mod flags;
mod meta;
mod mnemonic;
mod modrm;
mod operand;
mod prefix;
mod resolve;
mod tables;

mod tests;

pub use flags::{Flag, FlagAccess, FlagSet, FlagsSummary};
pub use meta::{cpuid, Category, CpuidFeature, CpuidReg, IsaSet, ModeSet, PrefixSet};
pub use mnemonic::{ConditionCode, Mnemonic};
pub use operand::{
    Access, Broadcast, MaskDecorator, MemFlags, MemOperand, Operand, OperandKind, RegSpec,
    Rounding, RegisterBank, RegisterClass, Segment,
};
pub use prefix::{Evex, Ext, Prefixes, Rex, Vex};

use decoder::{Error, ErrorKind, Reader};
use tables::{Mandatory, WalkCtx};

/// The architectural instruction length limit.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// The most operands a record can carry, implicit ones included.
pub const MAX_OPERANDS: usize = 6;

/// Processor operating mode the bytes are decoded under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MachineMode {
    /// 16-bit defaults (real mode, virtual-8086, 16-bit protected).
    Real,
    /// 32-bit defaults (protected mode, compatibility mode).
    Protected,
    /// 64-bit mode.
    Long,
}

/// An `x86` instruction decoder: the machine mode plus the default
/// operand/address size attributes of the executing segment.
///
/// Holds no other state; it is cheap to copy and safe to share between
/// threads. Every decode call is independent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Decoder {
    mode: MachineMode,
    default_operand_width: u8,
    default_address_width: u8,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::long()
    }
}

impl Decoder {
    /// A decoder for 64-bit mode.
    pub fn long() -> Decoder {
        Decoder { mode: MachineMode::Long, default_operand_width: 4, default_address_width: 8 }
    }

    /// A decoder for 32-bit protected (or compatibility) mode with a 32-bit
    /// code segment.
    pub fn protected() -> Decoder {
        Decoder { mode: MachineMode::Protected, default_operand_width: 4, default_address_width: 4 }
    }

    /// A decoder for real/virtual-8086 mode.
    pub fn real() -> Decoder {
        Decoder { mode: MachineMode::Real, default_operand_width: 2, default_address_width: 2 }
    }

    /// Override the default operand size (2 or 4 bytes): 16-bit code
    /// segments running under protected mode, and the like. 64-bit mode
    /// ignores this, as the hardware does.
    pub fn with_default_operand_width(mut self, width: u8) -> Decoder {
        debug_assert!(width == 2 || width == 4);
        self.default_operand_width = width;
        self
    }

    /// Override the default address size (2 or 4 bytes) for legacy modes.
    pub fn with_default_address_width(mut self, width: u8) -> Decoder {
        debug_assert!(width == 2 || width == 4);
        self.default_address_width = width;
        self
    }

    pub fn mode(&self) -> MachineMode {
        self.mode
    }

    /// Helper to decode an instruction directly from a byte slice.
    pub fn decode_slice(&self, data: &[u8]) -> Result<Instruction, Error> {
        let mut reader = Reader::new(data);
        decoder::Decodable::decode(self, &mut reader)
    }
}

impl decoder::Decodable for Decoder {
    type Instruction = Instruction;

    fn decode(&self, words: &mut Reader) -> Result<Self::Instruction, Error> {
        let mut instr = Instruction::empty();

        words.mark();
        read_instr(self, words, &mut instr)?;

        instr.length = words.offset() as u8;
        if words.offset() > MAX_INSTRUCTION_LEN {
            return Err(Error::new(ErrorKind::LengthExceeded, words.offset()));
        }

        Ok(instr)
    }

    fn max_width(&self) -> usize {
        MAX_INSTRUCTION_LEN
    }
}

/// Offsets and widths of the raw encoding fields, relative to the first
/// byte of the instruction.
///
/// The extents partition the encoded bytes exactly: `prefix_len +
/// opcode_len + modrm_len + sib_len + disp_len + imm_len` equals the
/// instruction length. Escape-prefix (VEX/EVEX/XOP) payloads count as
/// prefix bytes; absolute moffs offsets count as displacement; relative
/// branch offsets and far-pointer immediates count as immediate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub(crate) prefix_len: u8,
    pub(crate) opcode_off: u8,
    pub(crate) opcode_len: u8,
    pub(crate) modrm_off: u8,
    pub(crate) modrm_len: u8,
    pub(crate) sib_off: u8,
    pub(crate) sib_len: u8,
    pub(crate) disp_off: u8,
    pub(crate) disp_len: u8,
    pub(crate) imm_off: u8,
    pub(crate) imm_len: u8,
}

impl Layout {
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn opcode_offset(&self) -> u8 {
        self.opcode_off
    }

    pub fn opcode_len(&self) -> u8 {
        self.opcode_len
    }

    pub fn modrm_offset(&self) -> Option<u8> {
        (self.modrm_len != 0).then_some(self.modrm_off)
    }

    pub fn sib_offset(&self) -> Option<u8> {
        (self.sib_len != 0).then_some(self.sib_off)
    }

    pub fn disp_offset(&self) -> Option<u8> {
        (self.disp_len != 0).then_some(self.disp_off)
    }

    pub fn disp_len(&self) -> u8 {
        self.disp_len
    }

    pub fn imm_offset(&self) -> Option<u8> {
        (self.imm_len != 0).then_some(self.imm_off)
    }

    pub fn imm_len(&self) -> u8 {
        self.imm_len
    }

    /// Total bytes accounted for across all fields.
    pub fn extent(&self) -> usize {
        self.prefix_len as usize
            + self.opcode_len as usize
            + self.modrm_len as usize
            + self.sib_len as usize
            + self.disp_len as usize
            + self.imm_len as usize
    }

    pub(crate) fn note_disp(&mut self, off: u8, len: u8) {
        self.disp_off = off;
        self.disp_len = len;
    }

    pub(crate) fn note_imm(&mut self, off: u8, len: u8) {
        if self.imm_len == 0 {
            self.imm_off = off;
        }
        self.imm_len += len;
    }
}

/// A decoded `x86` instruction.
///
/// Constructed fresh by every decode call, immutable afterwards, and
/// self-contained: it borrows nothing from the input buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub(crate) mnemonic: Mnemonic,
    pub(crate) prefixes: Prefixes,
    pub(crate) layout: Layout,
    pub(crate) length: u8,
    pub(crate) operand_width: u8,
    pub(crate) address_width: u8,
    pub(crate) vector_width: u8,
    pub(crate) mem_width: u8,
    pub(crate) operands: [Operand; MAX_OPERANDS],
    pub(crate) operand_count: u8,
    pub(crate) flags: FlagsSummary,
    pub(crate) category: Category,
    pub(crate) isa: IsaSet,
    pub(crate) cpuid: Option<&'static CpuidFeature>,
    pub(crate) modes: ModeSet,
    pub(crate) allowed_prefixes: PrefixSet,
    pub(crate) mode_supported: bool,
    pub(crate) mask: Option<MaskDecorator>,
    pub(crate) broadcast: Option<Broadcast>,
    pub(crate) rounding: Option<Rounding>,
    pub(crate) sae: bool,
}

impl Instruction {
    pub(crate) fn empty() -> Instruction {
        Instruction {
            mnemonic: Mnemonic::Invalid,
            prefixes: Prefixes::default(),
            layout: Layout::default(),
            length: 0,
            operand_width: 0,
            address_width: 0,
            vector_width: 0,
            mem_width: 0,
            operands: [Operand::NOTHING; MAX_OPERANDS],
            operand_count: 0,
            flags: FlagsSummary::EMPTY,
            category: Category::Misc,
            isa: IsaSet::I86,
            cpuid: None,
            modes: ModeSet::EMPTY,
            allowed_prefixes: PrefixSet::NONE,
            mode_supported: false,
            mask: None,
            broadcast: None,
            rounding: None,
            sae: false,
        }
    }

    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    /// Total encoded length in bytes. Never exceeds
    /// [`MAX_INSTRUCTION_LEN`].
    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// Raw field offsets and widths of the encoding.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn operand_count(&self) -> u8 {
        self.operand_count
    }

    /// Operand `i`, explicit operands first, in encoding order.
    ///
    /// Panics when `i >= operand_count()`.
    pub fn operand(&self, i: u8) -> Operand {
        assert!(i < self.operand_count);
        self.operands[i as usize]
    }

    /// All operands, explicit then implicit.
    pub fn operands(&self) -> &[Operand] {
        &self.operands[..self.operand_count as usize]
    }

    /// The first memory operand, if the instruction touches memory.
    pub fn memory_operand(&self) -> Option<&Operand> {
        self.operands().iter().find(|op| op.is_memory())
    }

    /// Effective operand width in bytes.
    pub fn operand_width(&self) -> u8 {
        self.operand_width
    }

    /// Effective address width in bytes.
    pub fn address_width(&self) -> u8 {
        self.address_width
    }

    /// Vector length in bytes; 0 for non-vector encodings.
    pub fn vector_width(&self) -> u8 {
        self.vector_width
    }

    /// Width in bytes of the instruction's memory access; 0 when there is
    /// no memory operand, or when the width is not a fixed byte count.
    pub fn memory_width(&self) -> u8 {
        self.mem_width
    }

    /// Per-flag access summary, projected from the instruction tables.
    pub fn flags(&self) -> FlagsSummary {
        self.flags
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn isa_set(&self) -> IsaSet {
        self.isa
    }

    pub fn cpuid_feature(&self) -> Option<&'static CpuidFeature> {
        self.cpuid
    }

    /// The contexts this instruction is architecturally valid in.
    pub fn valid_modes(&self) -> ModeSet {
        self.modes
    }

    /// The prefixes this instruction tolerates.
    pub fn allowed_prefixes(&self) -> PrefixSet {
        self.allowed_prefixes
    }

    /// Whether the definition is valid under the decoder's declared mode.
    /// Advisory: decoding succeeds either way.
    pub fn mode_supported(&self) -> bool {
        self.mode_supported
    }

    /// AVX-512 masking decorator, when present.
    pub fn mask(&self) -> Option<MaskDecorator> {
        self.mask
    }

    /// EVEX embedded-broadcast decorator, when present.
    pub fn broadcast(&self) -> Option<Broadcast> {
        self.broadcast
    }

    /// EVEX static rounding override, when present.
    pub fn rounding(&self) -> Option<Rounding> {
        self.rounding
    }

    /// Whether floating-point exceptions are suppressed (EVEX `{sae}`).
    pub fn suppresses_exceptions(&self) -> bool {
        self.sae
    }
}

impl decoder::Decoded for Instruction {
    #[inline]
    fn len(&self) -> usize {
        self.length as usize
    }

    fn is_call(&self) -> bool {
        matches!(self.mnemonic, Mnemonic::CALL | Mnemonic::CALLF)
    }

    fn is_ret(&self) -> bool {
        matches!(
            self.mnemonic,
            Mnemonic::RETURN
                | Mnemonic::RETF
                | Mnemonic::IRET
                | Mnemonic::IRETD
                | Mnemonic::IRETQ
        )
    }

    fn is_jump(&self) -> bool {
        use Mnemonic::*;
        matches!(
            self.mnemonic,
            JMP | JMPF
                | JO | JNO | JB | JNB | JZ | JNZ | JNA | JA
                | JS | JNS | JP | JNP | JL | JGE | JLE | JG
                | JCXZ | JECXZ | JRCXZ
                | LOOP | LOOPZ | LOOPNZ
        )
    }
}

/// Effective operand width under `decoder`'s defaults and the scanned
/// prefixes. `ignore_66` drops the operand-size override after it was
/// consumed as a mandatory prefix.
fn operand_width(decoder: &Decoder, prefixes: &Prefixes, ignore_66: bool) -> u8 {
    let sixty_six = prefixes.operand_size() && !ignore_66;
    match decoder.mode {
        MachineMode::Long => {
            if prefixes.w() {
                8
            } else if sixty_six {
                2
            } else {
                4
            }
        }
        _ => {
            let default = decoder.default_operand_width;
            if sixty_six {
                if default == 2 {
                    4
                } else {
                    2
                }
            } else {
                default
            }
        }
    }
}

fn address_width(decoder: &Decoder, prefixes: &Prefixes) -> u8 {
    match decoder.mode {
        MachineMode::Long => {
            if prefixes.address_size() {
                4
            } else {
                8
            }
        }
        _ => {
            let default = decoder.default_address_width;
            if prefixes.address_size() {
                if default == 2 {
                    4
                } else {
                    2
                }
            } else {
                default
            }
        }
    }
}

fn mode_bit(mode: MachineMode) -> ModeSet {
    match mode {
        MachineMode::Real => ModeSet::REAL,
        MachineMode::Protected => ModeSet::PROTECTED,
        MachineMode::Long => ModeSet::LONG,
    }
}

/// The linear decode pipeline: prefixes, table walk, ModRM/SIB, operands,
/// annotation. Length validation happens in the `decode` wrapper once the
/// total is known.
fn read_instr(decoder: &Decoder, words: &mut Reader, instr: &mut Instruction) -> Result<(), Error> {
    let scan = prefix::scan(decoder.mode, words)?;
    let prefixes = scan.prefixes;

    let walk_ctx = WalkCtx {
        mode: decoder.mode,
        prefixes: &prefixes,
        osz: operand_width(decoder, &prefixes, false),
        asz: address_width(decoder, &prefixes),
    };
    let walk = tables::walk(words, &walk_ctx, scan.opcode_byte)?;
    let def = walk.def;

    // A prefix consumed as a mandatory selector loses its ordinary meaning.
    let osz = operand_width(decoder, &prefixes, walk.mandatory == Mandatory::Op66);
    let asz = walk_ctx.asz;
    let rep_active = prefixes.rep_any()
        && !matches!(walk.mandatory, Mandatory::RepF2 | Mandatory::RepF3);

    instr.prefixes = prefixes;
    instr.layout.prefix_len = scan.prefix_len;
    instr.layout.opcode_off = scan.prefix_len;
    instr.layout.opcode_len = walk.opcode_len;

    let mut mrm = None;
    if def.requires_modrm() || walk.modrm.is_some() {
        let modrm_off = scan.prefix_len + walk.opcode_len;
        let byte = match walk.modrm {
            Some(byte) => byte,
            None => words
                .next()
                .ok_or_else(|| Error::new(ErrorKind::BufferTooSmall, words.offset()))?,
        };

        let m = modrm::read(
            words,
            decoder.mode,
            asz,
            &prefixes,
            byte,
            def.uses_vsib(),
            def.forces_direct(),
        )?;

        instr.layout.modrm_off = modrm_off;
        instr.layout.modrm_len = 1;
        if m.sib_present {
            instr.layout.sib_off = modrm_off + 1;
            instr.layout.sib_len = 1;
        }
        if m.disp_width != 0 {
            instr
                .layout
                .note_disp(modrm_off + 1 + instr.layout.sib_len, m.disp_width);
        }

        mrm = Some(m);
    }

    let resolve_ctx = resolve::ResolveCtx {
        mode: decoder.mode,
        prefixes: &prefixes,
        osz,
        asz,
        stack_width: if decoder.mode == MachineMode::Long {
            8
        } else {
            decoder.default_address_width
        },
        rep_active,
    };
    resolve::operands(&resolve_ctx, &walk, mrm.as_ref(), words, instr)?;

    instr.mnemonic = def.mnemonic;
    instr.operand_width = osz;
    instr.address_width = asz;
    instr.vector_width = prefixes.vector_width();
    instr.flags = FlagsSummary::new(def.flags);
    instr.category = def.category;
    instr.isa = def.isa;
    instr.cpuid = def.cpuid;
    instr.modes = def.modes;
    instr.allowed_prefixes = def.prefixes;
    instr.mode_supported = def.modes.contains(mode_bit(decoder.mode));

    // LOCK only encodes on lockable read-modify-write forms with a memory
    // destination; anything else is #UD in hardware.
    if prefixes.lock() {
        let lockable = def.prefixes.contains(PrefixSet::LOCK)
            && instr.operand_count > 0
            && instr.operands[0].is_memory();
        if !lockable {
            return Err(Error::new(ErrorKind::InvalidEncoding, words.offset()));
        }
    }

    Ok(())
}
