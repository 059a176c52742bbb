//! ModRM/SIB/displacement extraction.
//!
//! Parses the addressing bytes for one instruction under the effective
//! address size, applying the form exceptions that make x86 addressing
//! irregular:
//!
//! - `rm=4` with `SIB.index=4` (and REX.X clear) suppresses the index
//!   register no matter the scale, unless the form is VSIB.
//! - `mod=0, rm=5` in 64-bit mode is RIP-relative.
//! - `mod=0, SIB.base=5, SIB.index=4` is absolute disp32, distinct from the
//!   RIP-relative case.
//! - Control/debug register moves behave as `mod=3` regardless of the actual
//!   mod bits; displacement bytes the mod bits declare are consumed as
//!   length but ignored for addressing.
//!
//! Register fields come back as plain numbers with the REX extensions
//! applied; the resolver picks banks (and the EVEX high-register bits, which
//! depend on the operand's register class).

use crate::prefix::Prefixes;
use crate::MachineMode;
use decoder::{Error, ErrorKind, Reader};

/// The addressing part of a memory form, before register banks are chosen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MemoryForm {
    pub base: Option<u8>,
    pub index: Option<u8>,
    pub scale: u8,
    pub rip_relative: bool,
}

/// Everything the ModRM/SIB/displacement bytes said.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ModRm {
    pub raw: u8,
    /// ModRM.reg with the REX.R extension applied.
    pub reg: u8,
    /// The register selected by rm when the form is direct, REX.B applied.
    pub rm_reg: u8,
    /// Register-direct (mod=3, or forced for control/debug moves).
    pub direct: bool,
    pub mem: Option<MemoryForm>,
    pub sib_present: bool,
    /// Raw displacement value, sign-extended. EVEX disp8 compression is the
    /// resolver's concern; this is the encoded value.
    pub disp: i64,
    /// Encoded displacement width in bytes.
    pub disp_width: u8,
}

impl ModRm {
    #[inline]
    pub fn rm_bits(&self) -> u8 {
        self.raw & 7
    }
}

#[inline]
fn exhausted(words: &Reader) -> Error {
    Error::new(ErrorKind::BufferTooSmall, words.offset())
}

fn read_disp(words: &mut Reader, width: u8) -> Result<i64, Error> {
    match width {
        0 => Ok(0),
        1 => {
            let b = words.next().ok_or_else(|| exhausted(words))?;
            Ok(b as i8 as i64)
        }
        2 => {
            let mut buf = [0u8; 2];
            words.next_n(&mut buf).ok_or_else(|| exhausted(words))?;
            Ok(i16::from_le_bytes(buf) as i64)
        }
        4 => {
            let mut buf = [0u8; 4];
            words.next_n(&mut buf).ok_or_else(|| exhausted(words))?;
            Ok(i32::from_le_bytes(buf) as i64)
        }
        _ => unreachable!("displacement width {width}"),
    }
}

pub(crate) fn read(
    words: &mut Reader,
    mode: MachineMode,
    address_width: u8,
    prefixes: &Prefixes,
    modrm: u8,
    vsib: bool,
    force_direct: bool,
) -> Result<ModRm, Error> {
    let rex = prefixes.rex_unchecked();
    let rex_r = (rex.r() as u8) << 3;
    let rex_x = (rex.x() as u8) << 3;
    let rex_b = (rex.b() as u8) << 3;

    // VEX/EVEX carry the same extensions for instructions without REX.
    let (ext_r, ext_x, ext_b) = match (prefixes.vex(), prefixes.evex()) {
        (Some(vex), _) => ((vex.r as u8) << 3, (vex.x as u8) << 3, (vex.b as u8) << 3),
        (_, Some(evex)) => ((evex.r as u8) << 3, (evex.x as u8) << 3, (evex.b as u8) << 3),
        _ => (rex_r, rex_x, rex_b),
    };

    let mod_bits = modrm >> 6;
    let reg = ((modrm >> 3) & 7) | ext_r;
    let rm = modrm & 7;

    let mut out = ModRm {
        raw: modrm,
        reg,
        rm_reg: rm | ext_b,
        direct: true,
        mem: None,
        sib_present: false,
        disp: 0,
        disp_width: 0,
    };

    if mod_bits == 0b11 {
        return Ok(out);
    }

    out.direct = force_direct;

    let (mem, disp_width) = if address_width == 2 {
        read_mem16(mod_bits, rm)
    } else {
        read_mem32_64(words, mode, mod_bits, rm, ext_x, ext_b, vsib, &mut out)?
    };

    out.disp = read_disp(words, disp_width)?;
    out.disp_width = disp_width;

    if !force_direct {
        out.mem = Some(mem);
    }

    Ok(out)
}

/// 16-bit addressing: fixed base/index compositions, no SIB ever.
fn read_mem16(mod_bits: u8, rm: u8) -> (MemoryForm, u8) {
    const BX: u8 = 3;
    const BP: u8 = 5;
    const SI: u8 = 6;
    const DI: u8 = 7;

    let (base, index) = match rm {
        0 => (Some(BX), Some(SI)),
        1 => (Some(BX), Some(DI)),
        2 => (Some(BP), Some(SI)),
        3 => (Some(BP), Some(DI)),
        4 => (Some(SI), None),
        5 => (Some(DI), None),
        6 if mod_bits == 0 => (None, None),
        6 => (Some(BP), None),
        _ => (Some(BX), None),
    };

    let disp_width = match mod_bits {
        0 if rm == 6 => 2,
        0 => 0,
        1 => 1,
        _ => 2,
    };

    let mem = MemoryForm { base, index, scale: 1, rip_relative: false };
    (mem, disp_width)
}

fn read_mem32_64(
    words: &mut Reader,
    mode: MachineMode,
    mod_bits: u8,
    rm: u8,
    ext_x: u8,
    ext_b: u8,
    vsib: bool,
    out: &mut ModRm,
) -> Result<(MemoryForm, u8), Error> {
    let mut disp_width = match mod_bits {
        0 => 0,
        1 => 1,
        _ => 4,
    };

    let mem = if rm == 4 {
        let sib = words.next().ok_or_else(|| exhausted(words))?;
        out.sib_present = true;

        let base_bits = sib & 7;
        let index_num = ((sib >> 3) & 7) | ext_x;
        let scale = 1u8 << (sib >> 6);

        // iii=100 with REX.X clear selects no index register regardless of
        // the scale bits. VSIB forms have no suppressed encoding; the same
        // bits name vector register 4.
        let index = if index_num == 0b0100 && !vsib {
            None
        } else {
            Some(index_num)
        };

        let base = if base_bits == 0b101 && mod_bits == 0 {
            // Base becomes a plain disp32; with the index also suppressed
            // this is the absolute-32 form, even in 64-bit mode.
            disp_width = 4;
            None
        } else {
            Some(base_bits | ext_b)
        };

        MemoryForm { base, index, scale, rip_relative: false }
    } else if rm == 5 && mod_bits == 0 {
        disp_width = 4;
        if mode == MachineMode::Long {
            MemoryForm { base: None, index: None, scale: 1, rip_relative: true }
        } else {
            MemoryForm { base: None, index: None, scale: 1, rip_relative: false }
        }
    } else {
        MemoryForm { base: Some(rm | ext_b), index: None, scale: 1, rip_relative: false }
    };

    Ok((mem, disp_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix;

    fn read64(bytes: &[u8], vsib: bool, force_direct: bool) -> ModRm {
        let mut reader = Reader::new(bytes);
        let modrm = reader.next().unwrap();
        read(
            &mut reader,
            MachineMode::Long,
            8,
            &Prefixes::default(),
            modrm,
            vsib,
            force_direct,
        )
        .expect("modrm")
    }

    fn read64_rex(rex_and_bytes: &[u8], vsib: bool) -> ModRm {
        let mut reader = Reader::new(rex_and_bytes);
        let scan = prefix::scan(MachineMode::Long, &mut reader).unwrap();
        // The scan consumed the opcode byte; re-wind the test data so the
        // modrm byte is next. Tests pass a dummy 0x00 opcode before modrm.
        assert_eq!(scan.opcode_byte, 0x00);
        let modrm = reader.next().unwrap();
        read(&mut reader, MachineMode::Long, 8, &scan.prefixes, modrm, vsib, false).expect("modrm")
    }

    #[test]
    fn direct_form() {
        let m = read64(&[0xc8], false, false);
        assert!(m.direct);
        assert_eq!(m.reg, 1);
        assert_eq!(m.rm_reg, 0);
        assert_eq!(m.disp_width, 0);
    }

    #[test]
    fn index_suppression_ignores_scale() {
        // SIB = 0xe3: scale=8, index=100 (suppressed), base=rbx.
        let m = read64(&[0x04, 0xe3], false, false);
        let mem = m.mem.unwrap();
        assert_eq!(mem.base, Some(3));
        assert_eq!(mem.index, None);

        // REX.X makes the same bits select r12 as index.
        let m = read64_rex(&[0x42, 0x00, 0x04, 0xe3], false);
        let mem = m.mem.unwrap();
        assert_eq!(mem.index, Some(12));
        assert_eq!(mem.scale, 8);
    }

    #[test]
    fn vsib_index_is_never_suppressed() {
        let m = read64(&[0x04, 0xe3], true, false);
        let mem = m.mem.unwrap();
        assert_eq!(mem.index, Some(4));
    }

    #[test]
    fn rip_relative_vs_absolute() {
        // mod=0, rm=5: RIP-relative in 64-bit mode.
        let m = read64(&[0x05, 0x78, 0x56, 0x34, 0x12], false, false);
        let mem = m.mem.unwrap();
        assert!(mem.rip_relative);
        assert_eq!(m.disp, 0x12345678);
        assert_eq!(m.disp_width, 4);

        // mod=0, SIB base=5, index=4: absolute disp32, not RIP-relative.
        let m = read64(&[0x04, 0x25, 0x78, 0x56, 0x34, 0x12], false, false);
        let mem = m.mem.unwrap();
        assert!(!mem.rip_relative);
        assert_eq!(mem.base, None);
        assert_eq!(mem.index, None);
        assert_eq!(m.disp, 0x12345678);
    }

    #[test]
    fn forced_direct_still_consumes_displacement() {
        let m = read64(&[0x45, 0x10], false, true);
        assert!(m.direct);
        assert_eq!(m.mem, None);
        assert_eq!(m.rm_reg, 5);
        assert_eq!(m.disp_width, 1);
    }

    #[test]
    fn sixteen_bit_forms() {
        let mut reader = Reader::new(&[0x42, 0x08]);
        let modrm = reader.next().unwrap();
        let m = read(
            &mut reader,
            MachineMode::Real,
            2,
            &Prefixes::default(),
            modrm,
            false,
            false,
        )
        .unwrap();
        let mem = m.mem.unwrap();
        // rm=2 is [bp+si], mod=1 gives a byte displacement.
        assert_eq!(mem.base, Some(5));
        assert_eq!(mem.index, Some(6));
        assert_eq!(m.disp, 8);

        // mod=0 rm=6 is absolute disp16.
        let mut reader = Reader::new(&[0x06, 0x34, 0x12]);
        let modrm = reader.next().unwrap();
        let m = read(
            &mut reader,
            MachineMode::Real,
            2,
            &Prefixes::default(),
            modrm,
            false,
            false,
        )
        .unwrap();
        let mem = m.mem.unwrap();
        assert_eq!(mem.base, None);
        assert_eq!(m.disp, 0x1234);
        assert_eq!(m.disp_width, 2);
    }

    #[test]
    fn truncated_displacement() {
        let mut reader = Reader::new(&[0x80]);
        let modrm = reader.next().unwrap();
        let err = read(
            &mut reader,
            MachineMode::Long,
            8,
            &Prefixes::default(),
            modrm,
            false,
            false,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    }
}
