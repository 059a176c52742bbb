//! Prefix scanning.
//!
//! A single forward pass over the prefix run, keeping the most recent prefix
//! of each class. Redundant prefixes are legal and only cost length; among
//! conflicting same-class prefixes the last one before the opcode wins. REX
//! is positional: it only applies when it is the byte immediately preceding
//! the opcode (or escape), so any later prefix voids a previously seen REX.

use crate::MachineMode;
use decoder::{Error, ErrorKind, Reader};

use crate::operand::Segment;

/// REX prefix bits (64-bit mode only).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Rex {
    bits: u8,
}

impl Rex {
    #[inline]
    pub(crate) fn present(&self) -> bool {
        self.bits & 0x40 == 0x40
    }

    #[inline]
    pub fn w(&self) -> bool {
        self.bits & 0x08 == 0x08
    }

    #[inline]
    pub fn r(&self) -> bool {
        self.bits & 0x04 == 0x04
    }

    #[inline]
    pub fn x(&self) -> bool {
        self.bits & 0x02 == 0x02
    }

    #[inline]
    pub fn b(&self) -> bool {
        self.bits & 0x01 == 0x01
    }
}

/// A VEX or XOP escape prefix, normalized from its 2- or 3-byte form.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Vex {
    /// Opcode map: 1 = 0F, 2 = 0F38, 3 = 0F3A (8..=10 for XOP).
    pub(crate) map: u8,
    /// Embedded mandatory prefix: 0 = none, 1 = 66, 2 = F3, 3 = F2.
    pub(crate) pp: u8,
    pub(crate) w: bool,
    /// Vector length: false = 128-bit, true = 256-bit.
    pub(crate) l: bool,
    pub(crate) r: bool,
    pub(crate) x: bool,
    pub(crate) b: bool,
    /// Inverted in the encoding; stored here already decoded.
    pub(crate) vvvv: u8,
}

impl Vex {
    pub fn w(&self) -> bool {
        self.w
    }

    pub fn vvvv(&self) -> u8 {
        self.vvvv
    }

    /// Vector length in bytes.
    pub fn vector_width(&self) -> u8 {
        if self.l {
            32
        } else {
            16
        }
    }
}

/// An EVEX escape prefix.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Evex {
    pub(crate) map: u8,
    pub(crate) pp: u8,
    pub(crate) w: bool,
    /// `L'L` vector length bits; 3 is reserved for rounding control.
    pub(crate) ll: u8,
    pub(crate) r: bool,
    pub(crate) x: bool,
    pub(crate) b: bool,
    /// `R'`, extending ModRM.reg to 32 registers.
    pub(crate) rp: bool,
    pub(crate) vvvv: u8,
    /// `V'`, extending vvvv (and the VSIB index) to 32 registers.
    pub(crate) vp: bool,
    /// Mask register selector; 0 means unmasked.
    pub(crate) aaa: u8,
    /// Zeroing (vs merging) for masked lanes.
    pub(crate) z: bool,
    /// Broadcast for memory forms; rounding-control marker for reg forms.
    pub(crate) bcst: bool,
}

impl Evex {
    pub fn w(&self) -> bool {
        self.w
    }

    pub fn mask_reg(&self) -> u8 {
        self.aaa
    }

    pub fn zeroing(&self) -> bool {
        self.z
    }

    pub fn broadcast(&self) -> bool {
        self.bcst
    }

    /// Vector length in bytes. The `ll == 3` encoding is only reachable for
    /// register forms with rounding control, where length is implied 512.
    pub fn vector_width(&self) -> u8 {
        match self.ll {
            0 => 16,
            1 => 32,
            _ => 64,
        }
    }
}

/// Which escape-prefix family introduced the instruction, if any.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Ext {
    #[default]
    None,
    Vex(Vex),
    Xop(Vex),
    Evex(Evex),
}

/// The prefix state of one decoded instruction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Prefixes {
    bits: u8,
    /// Raw last segment-override byte, 0 if none was seen.
    segment: u8,
    rex: Rex,
    ext: Ext,
}

const OPERAND_SIZE: u8 = 0x01;
const ADDRESS_SIZE: u8 = 0x02;
const LOCK: u8 = 0x04;
const REP_MASK: u8 = 0x30;
const REP: u8 = 0x10;
const REPNZ: u8 = 0x30;

impl Prefixes {
    #[inline]
    pub fn operand_size(&self) -> bool {
        self.bits & OPERAND_SIZE != 0
    }

    #[inline]
    fn set_operand_size(&mut self) {
        self.bits |= OPERAND_SIZE;
    }

    #[inline]
    pub fn address_size(&self) -> bool {
        self.bits & ADDRESS_SIZE != 0
    }

    #[inline]
    fn set_address_size(&mut self) {
        self.bits |= ADDRESS_SIZE;
    }

    #[inline]
    pub fn lock(&self) -> bool {
        self.bits & LOCK != 0
    }

    #[inline]
    fn set_lock(&mut self) {
        self.bits |= LOCK;
    }

    #[inline]
    pub fn rep(&self) -> bool {
        self.bits & REP_MASK == REP
    }

    #[inline]
    fn set_rep(&mut self) {
        self.bits = (self.bits & !REP_MASK) | REP;
    }

    #[inline]
    pub fn repnz(&self) -> bool {
        self.bits & REP_MASK == REPNZ
    }

    #[inline]
    fn set_repnz(&mut self) {
        self.bits = (self.bits & !REP_MASK) | REPNZ;
    }

    #[inline]
    pub fn rep_any(&self) -> bool {
        self.bits & REP_MASK != 0
    }

    /// The winning segment-override prefix as encoded, before mode rules.
    pub fn segment_override(&self) -> Option<Segment> {
        match self.segment {
            0x26 => Some(Segment::Es),
            0x2e => Some(Segment::Cs),
            0x36 => Some(Segment::Ss),
            0x3e => Some(Segment::Ds),
            0x64 => Some(Segment::Fs),
            0x65 => Some(Segment::Gs),
            _ => None,
        }
    }

    /// The segment override that actually affects addressing in `mode`.
    ///
    /// 64-bit mode honors only FS/GS; the other four are consumed as length
    /// but have no addressing effect.
    pub(crate) fn honored_segment(&self, mode: MachineMode) -> Option<Segment> {
        let segment = self.segment_override()?;
        if mode == MachineMode::Long && !matches!(segment, Segment::Fs | Segment::Gs) {
            return None;
        }
        Some(segment)
    }

    #[inline]
    pub fn rex(&self) -> Option<Rex> {
        if self.rex.present() {
            Some(self.rex)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn rex_unchecked(&self) -> Rex {
        self.rex
    }

    #[inline]
    pub fn ext(&self) -> Ext {
        self.ext
    }

    pub fn vex(&self) -> Option<Vex> {
        match self.ext {
            Ext::Vex(vex) | Ext::Xop(vex) => Some(vex),
            _ => None,
        }
    }

    pub fn evex(&self) -> Option<Evex> {
        match self.ext {
            Ext::Evex(evex) => Some(evex),
            _ => None,
        }
    }

    /// The `W` bit from whichever prefix carries one.
    pub(crate) fn w(&self) -> bool {
        match self.ext {
            Ext::None => self.rex.w(),
            Ext::Vex(vex) | Ext::Xop(vex) => vex.w,
            Ext::Evex(evex) => evex.w,
        }
    }

    /// The embedded mandatory-prefix selector of the escape prefix, if any.
    pub(crate) fn ext_pp(&self) -> Option<u8> {
        match self.ext {
            Ext::None => None,
            Ext::Vex(vex) | Ext::Xop(vex) => Some(vex.pp),
            Ext::Evex(evex) => Some(evex.pp),
        }
    }

    /// Vector length in bytes, 0 when no escape prefix is present.
    pub(crate) fn vector_width(&self) -> u8 {
        match self.ext {
            Ext::None => 0,
            Ext::Vex(vex) | Ext::Xop(vex) => vex.vector_width(),
            Ext::Evex(evex) => evex.vector_width(),
        }
    }
}

/// What the scanner hands the table walker.
#[derive(Debug)]
pub(crate) struct Scan {
    pub prefixes: Prefixes,
    /// First opcode byte, already consumed from the reader. For escape-
    /// prefixed instructions this is the byte after the escape payload and
    /// the map lives in `prefixes.ext()`.
    pub opcode_byte: u8,
    /// Bytes preceding the opcode byte (legacy prefixes, REX, escape
    /// payloads). Recorded into the raw field layout.
    pub prefix_len: u8,
}

#[inline]
fn exhausted(words: &Reader) -> Error {
    Error::new(ErrorKind::BufferTooSmall, words.offset())
}

#[inline]
fn invalid(words: &Reader) -> Error {
    Error::new(ErrorKind::InvalidEncoding, words.offset())
}

pub(crate) fn scan(mode: MachineMode, words: &mut Reader) -> Result<Scan, Error> {
    let mut prefixes = Prefixes::default();

    loop {
        // A prefix run that leaves no room for an opcode within the
        // architectural limit cannot decode no matter what follows.
        if words.offset() >= 15 {
            return Err(Error::new(ErrorKind::LengthExceeded, words.offset()));
        }

        let b = words.next().ok_or_else(|| exhausted(words))?;

        match b {
            0x66 => prefixes.set_operand_size(),
            0x67 => prefixes.set_address_size(),
            0xf0 => prefixes.set_lock(),
            0xf2 => prefixes.set_repnz(),
            0xf3 => prefixes.set_rep(),
            0x26 | 0x2e | 0x36 | 0x3e | 0x64 | 0x65 => prefixes.segment = b,
            0x40..=0x4f if mode == MachineMode::Long => {
                prefixes.rex = Rex { bits: b };
                // REX followed by anything but the opcode is voided below.
                continue;
            }
            0xc4 | 0xc5 | 0x62 => {
                if is_escape_prefix(mode, words)? {
                    return read_escape(b, prefixes, words);
                }
                return Ok(Scan {
                    prefixes,
                    opcode_byte: b,
                    prefix_len: (words.offset() - 1) as u8,
                });
            }
            0x8f if is_xop_prefix(words) => {
                return read_escape(b, prefixes, words);
            }
            _ => {
                return Ok(Scan {
                    prefixes,
                    opcode_byte: b,
                    prefix_len: (words.offset() - 1) as u8,
                });
            }
        }

        // A legacy prefix after REX makes that REX just another inert byte.
        prefixes.rex = Rex::default();
    }
}

/// In 16/32-bit modes `C4`/`C5`/`62` are LES/LDS/BOUND unless the byte that
/// follows has its top two (mod) bits set, which no register-form of those
/// instructions can encode. In 64-bit mode they are always escapes.
fn is_escape_prefix(mode: MachineMode, words: &Reader) -> Result<bool, Error> {
    if mode == MachineMode::Long {
        return Ok(true);
    }
    let next = words.peek().ok_or_else(|| exhausted(words))?;
    Ok(next & 0xc0 == 0xc0)
}

/// `8F` escapes to the XOP maps only when the would-be map selector is 8 or
/// above; below that the byte is the POP r/m group.
fn is_xop_prefix(words: &Reader) -> bool {
    match words.peek() {
        Some(next) => next & 0x1f >= 8,
        None => false,
    }
}

/// Reads a VEX/XOP/EVEX payload plus the opcode byte that must follow it.
///
/// These escapes are mutually exclusive with REX and the legacy SIMD
/// prefixes; encodings that combine them raise #UD in hardware and decode to
/// nothing here.
fn read_escape(b: u8, mut prefixes: Prefixes, words: &mut Reader) -> Result<Scan, Error> {
    if prefixes.rex_unchecked().present()
        || prefixes.lock()
        || prefixes.operand_size()
        || prefixes.rep_any()
    {
        return Err(invalid(words));
    }

    let ext = match b {
        0xc5 => {
            let p = words.next().ok_or_else(|| exhausted(words))?;
            Ext::Vex(Vex {
                map: 1,
                pp: p & 0x03,
                w: false,
                l: p & 0x04 != 0,
                r: p & 0x80 == 0,
                x: false,
                b: false,
                vvvv: (!p >> 3) & 0x0f,
            })
        }
        0xc4 | 0x8f => {
            let p0 = words.next().ok_or_else(|| exhausted(words))?;
            let p1 = words.next().ok_or_else(|| exhausted(words))?;
            let map = p0 & 0x1f;
            let vex = Vex {
                map,
                pp: p1 & 0x03,
                w: p1 & 0x80 != 0,
                l: p1 & 0x04 != 0,
                r: p0 & 0x80 == 0,
                x: p0 & 0x40 == 0,
                b: p0 & 0x20 == 0,
                vvvv: (!p1 >> 3) & 0x0f,
            };
            if b == 0x8f {
                if !(8..=10).contains(&map) {
                    return Err(invalid(words));
                }
                Ext::Xop(vex)
            } else {
                if !(1..=3).contains(&map) {
                    return Err(invalid(words));
                }
                Ext::Vex(vex)
            }
        }
        0x62 => {
            let p0 = words.next().ok_or_else(|| exhausted(words))?;
            let p1 = words.next().ok_or_else(|| exhausted(words))?;
            let p2 = words.next().ok_or_else(|| exhausted(words))?;
            let map = p0 & 0x03;
            // Reserved bits: P0[3:2] must be zero, P1[2] must be one.
            if p0 & 0x0c != 0 || p1 & 0x04 == 0 || map == 0 {
                return Err(invalid(words));
            }
            Ext::Evex(Evex {
                map,
                pp: p1 & 0x03,
                w: p1 & 0x80 != 0,
                ll: (p2 >> 5) & 0x03,
                r: p0 & 0x80 == 0,
                x: p0 & 0x40 == 0,
                b: p0 & 0x20 == 0,
                rp: p0 & 0x10 == 0,
                vvvv: (!p1 >> 3) & 0x0f,
                vp: p2 & 0x08 == 0,
                aaa: p2 & 0x07,
                z: p2 & 0x80 != 0,
                bcst: p2 & 0x10 != 0,
            })
        }
        _ => unreachable!("escape prefix byte {b:#x}"),
    };

    prefixes.ext = ext;

    let opcode_byte = words.next().ok_or_else(|| exhausted(words))?;
    Ok(Scan {
        prefixes,
        opcode_byte,
        prefix_len: (words.offset() - 1) as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoder::Reader;

    fn scan64(data: &[u8]) -> Scan {
        let mut reader = Reader::new(data);
        scan(MachineMode::Long, &mut reader).expect("prefix scan")
    }

    #[test]
    fn last_rep_wins() {
        let s = scan64(&[0xf2, 0xf2, 0xf3, 0xaa]);
        assert!(s.prefixes.rep());
        assert!(!s.prefixes.repnz());
        assert_eq!(s.prefix_len, 3);
        assert_eq!(s.opcode_byte, 0xaa);
    }

    #[test]
    fn last_segment_wins() {
        let s = scan64(&[0x65, 0x2e, 0x90]);
        assert_eq!(s.prefixes.segment_override(), Some(Segment::Cs));
        // CS is inert in 64-bit mode, so no effective override remains.
        assert_eq!(s.prefixes.honored_segment(MachineMode::Long), None);

        let s = scan64(&[0x2e, 0x65, 0x90]);
        assert_eq!(s.prefixes.honored_segment(MachineMode::Long), Some(Segment::Gs));
    }

    #[test]
    fn rex_is_positional() {
        let s = scan64(&[0x48, 0x66, 0x90]);
        assert_eq!(s.prefixes.rex(), None);
        assert!(s.prefixes.operand_size());

        let s = scan64(&[0x66, 0x48, 0x90]);
        assert!(s.prefixes.rex().expect("rex kept").w());
    }

    #[test]
    fn rex_outside_long_mode_is_an_opcode() {
        let mut reader = Reader::new(&[0x48, 0x90]);
        let s = scan(MachineMode::Protected, &mut reader).expect("scan");
        assert_eq!(s.opcode_byte, 0x48);
        assert_eq!(s.prefix_len, 0);
    }

    #[test]
    fn vex_rejects_simd_prefix_conflicts() {
        for lead in [0x66, 0xf2, 0xf3, 0xf0] {
            let bytes = [lead, 0xc5, 0xf8, 0x58, 0xc1];
            let mut reader = Reader::new(&bytes);
            let err = scan(MachineMode::Long, &mut reader).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        }
    }

    #[test]
    fn two_byte_vex_payload() {
        let s = scan64(&[0xc5, 0xf8, 0x58, 0xc1]);
        let vex = s.prefixes.vex().expect("vex");
        assert_eq!(vex.map, 1);
        assert_eq!(vex.pp, 0);
        assert_eq!(vex.vvvv, 0);
        assert!(!vex.l);
        assert_eq!(s.opcode_byte, 0x58);
        assert_eq!(s.prefix_len, 2);
    }

    #[test]
    fn evex_payload() {
        // 62 F1 74 18 58 C2: vaddps xmm0{k0}, zmm1..., rounding form.
        let s = scan64(&[0x62, 0xf1, 0x74, 0x18, 0x58, 0xc2]);
        let evex = s.prefixes.evex().expect("evex");
        assert_eq!(evex.map, 1);
        assert_eq!(evex.pp, 0);
        assert_eq!(evex.vvvv, 1);
        assert!(evex.broadcast());
        assert_eq!(s.opcode_byte, 0x58);
        assert_eq!(s.prefix_len, 4);
    }

    #[test]
    fn bound_vs_evex_in_protected_mode() {
        // mod bits of the following byte pick BOUND over EVEX.
        let mut reader = Reader::new(&[0x62, 0x08]);
        let s = scan(MachineMode::Protected, &mut reader).expect("scan");
        assert_eq!(s.opcode_byte, 0x62);

        let mut reader = Reader::new(&[0x62, 0xf1, 0x74, 0x18, 0x58, 0xc2]);
        let s = scan(MachineMode::Protected, &mut reader).expect("scan");
        assert!(s.prefixes.evex().is_some());
    }

    #[test]
    fn endless_prefixes_hit_the_length_cap() {
        let data = [0x66u8; 20];
        let mut reader = Reader::new(&data);
        let err = scan(MachineMode::Long, &mut reader).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthExceeded);
    }

    #[test]
    fn truncated_prefix_run() {
        let mut reader = Reader::new(&[0x66, 0x2e]);
        let err = scan(MachineMode::Long, &mut reader).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    }
}
