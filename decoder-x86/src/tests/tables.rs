//! Whole-table checks: every definition reachable from the legacy maps is
//! structurally sound, its minimal encoding decodes to exactly the bytes it
//! needs, and truncating that encoding is reported as a short buffer rather
//! than some other instruction.

use crate::tables::{self, InstDef, OpSpec, OpcodeSlot};
use crate::{Decoder, MAX_OPERANDS};
use decoder::{Decoded, ErrorKind};
use once_cell::sync::Lazy;

#[derive(Clone, Default)]
struct Path {
    mandatory: Option<u8>,
    need_66: bool,
    need_67: bool,
    need_rexw: bool,
}

struct Case {
    def: &'static InstDef,
    bytes: Vec<u8>,
}

fn def_wants_memory(def: &'static InstDef) -> bool {
    def.operands
        .iter()
        .any(|op| matches!(op.spec, OpSpec::RmMem | OpSpec::RmMemVsib(_)))
}

#[allow(clippy::too_many_arguments)]
fn collect(
    slot: &OpcodeSlot,
    opcode: &[u8],
    path: Path,
    long: bool,
    modrm_mem: Option<bool>,
    modrm_reg: Option<u8>,
    modrm_rm: Option<u8>,
    out: &mut Vec<Case>,
) {
    match slot {
        OpcodeSlot::None | OpcodeSlot::Prefix | OpcodeSlot::Esc(_) => {}
        OpcodeSlot::Inst(def) => {
            if path.need_rexw && !long {
                return;
            }

            let mut bytes = Vec::new();
            if path.need_66 {
                bytes.push(0x66);
            }
            if path.need_67 {
                bytes.push(0x67);
            }
            if let Some(prefix) = path.mandatory {
                bytes.push(prefix);
            }
            if path.need_rexw {
                bytes.push(0x48);
            }
            bytes.extend_from_slice(opcode);

            let needs_modrm = def.requires_modrm()
                || modrm_mem.is_some()
                || modrm_reg.is_some()
                || modrm_rm.is_some();
            if needs_modrm {
                let mem = modrm_mem.unwrap_or_else(|| def_wants_memory(def));
                let vsib = def.uses_vsib();
                let mod_bits: u8 = if mem { 0b00 } else { 0b11 };
                let reg = modrm_reg.unwrap_or(0);
                let rm = modrm_rm.unwrap_or(if mem && vsib { 4 } else { 0 });
                bytes.push((mod_bits << 6) | (reg << 3) | rm);
                if mem && vsib {
                    // [rax + xmm1*1]
                    bytes.push(0x08);
                }
            }

            // Room for whatever displacement/immediate the form requires.
            bytes.extend_from_slice(&[0u8; 16]);
            out.push(Case { def, bytes });
        }
        OpcodeSlot::Pfx(select) => {
            let subs = [
                (None, &select.none),
                (Some(0x66), &select.p66),
                (Some(0xf3), &select.pf3),
                (Some(0xf2), &select.pf2),
            ];
            for (prefix, sub) in subs {
                let mut path = path.clone();
                path.mandatory = prefix;
                collect(sub, opcode, path, long, modrm_mem, modrm_reg, modrm_rm, out);
            }
        }
        OpcodeSlot::Grp(group) => {
            for (reg, sub) in group.slots.iter().enumerate() {
                collect(sub, opcode, path.clone(), long, modrm_mem, Some(reg as u8), modrm_rm, out);
            }
        }
        OpcodeSlot::ModSplit(split) => {
            collect(&split.mem, opcode, path.clone(), long, Some(true), modrm_reg, modrm_rm, out);
            collect(&split.reg, opcode, path.clone(), long, Some(false), modrm_reg, modrm_rm, out);
        }
        OpcodeSlot::Rm(row) => {
            for (rm, sub) in row.slots.iter().enumerate() {
                collect(sub, opcode, path.clone(), long, modrm_mem, modrm_reg, Some(rm as u8), out);
            }
        }
        OpcodeSlot::Mode(select) => {
            let sub = if long { &select.long } else { &select.legacy };
            collect(sub, opcode, path, long, modrm_mem, modrm_reg, modrm_rm, out);
        }
        OpcodeSlot::Osz(select) => {
            let mut with_66 = path.clone();
            with_66.need_66 = true;
            collect(&select.o16, opcode, with_66, long, modrm_mem, modrm_reg, modrm_rm, out);
            collect(&select.o32, opcode, path.clone(), long, modrm_mem, modrm_reg, modrm_rm, out);
            if long {
                let mut with_w = path;
                with_w.need_rexw = true;
                collect(&select.o64, opcode, with_w, long, modrm_mem, modrm_reg, modrm_rm, out);
            }
        }
        OpcodeSlot::Asz(select) => {
            let mut with_67 = path.clone();
            with_67.need_67 = true;
            if long {
                collect(&select.a64, opcode, path, long, modrm_mem, modrm_reg, modrm_rm, out);
                collect(&select.a32, opcode, with_67, long, modrm_mem, modrm_reg, modrm_rm, out);
            } else {
                collect(&select.a32, opcode, path, long, modrm_mem, modrm_reg, modrm_rm, out);
                collect(&select.a16, opcode, with_67, long, modrm_mem, modrm_reg, modrm_rm, out);
            }
        }
        OpcodeSlot::W(select) => {
            collect(&select.w0, opcode, path.clone(), long, modrm_mem, modrm_reg, modrm_rm, out);
            if long {
                let mut with_w = path;
                with_w.need_rexw = true;
                collect(&select.w1, opcode, with_w, long, modrm_mem, modrm_reg, modrm_rm, out);
            }
        }
        // Vector-length selects only exist behind escape prefixes, which
        // targeted tests exercise; synthesis covers the legacy maps.
        OpcodeSlot::Vl(_) => {}
    }
}

fn collect_mode(long: bool) -> Vec<Case> {
    let mut out = Vec::new();
    for (byte, slot) in tables::one_byte::MAP.iter().enumerate() {
        collect(slot, &[byte as u8], Path::default(), long, None, None, None, &mut out);
    }
    for (byte, slot) in tables::two_byte::MAP.iter().enumerate() {
        collect(slot, &[0x0f, byte as u8], Path::default(), long, None, None, None, &mut out);
    }
    for (byte, slot) in tables::three_byte::MAP_0F38.iter().enumerate() {
        collect(slot, &[0x0f, 0x38, byte as u8], Path::default(), long, None, None, None, &mut out);
    }
    for (byte, slot) in tables::three_byte::MAP_0F3A.iter().enumerate() {
        collect(slot, &[0x0f, 0x3a, byte as u8], Path::default(), long, None, None, None, &mut out);
    }
    out
}

static CASES_LONG: Lazy<Vec<Case>> = Lazy::new(|| collect_mode(true));
static CASES_PROTECTED: Lazy<Vec<Case>> = Lazy::new(|| collect_mode(false));

#[test]
fn tables_are_not_empty() {
    assert!(CASES_LONG.len() > 300, "only {} cases", CASES_LONG.len());
    assert!(CASES_PROTECTED.len() > 300, "only {} cases", CASES_PROTECTED.len());
}

#[test]
fn definitions_are_structurally_sound() {
    for case in CASES_LONG.iter().chain(CASES_PROTECTED.iter()) {
        let def = case.def;
        let total = def.operands.len() + def.implicit.len();
        // One slot is reserved for the REP counter.
        assert!(total + 1 <= MAX_OPERANDS, "{:?} has {} operands", def.mnemonic, total);

        let rm_sources = def
            .operands
            .iter()
            .filter(|op| {
                matches!(
                    op.spec,
                    OpSpec::RmGp
                        | OpSpec::RmGpBitBase
                        | OpSpec::RmVec
                        | OpSpec::RmMm
                        | OpSpec::RmMem
                        | OpSpec::RmMemVsib(_)
                        | OpSpec::StRm
                )
            })
            .count();
        assert!(rm_sources <= 1, "{:?} encodes rm twice", def.mnemonic);

        let reg_sources = def
            .operands
            .iter()
            .filter(|op| {
                matches!(
                    op.spec,
                    OpSpec::RegGp
                        | OpSpec::RegVec
                        | OpSpec::RegMm
                        | OpSpec::RegSeg
                        | OpSpec::RegCtrl
                        | OpSpec::RegDbg
                )
            })
            .count();
        assert!(reg_sources <= 1, "{:?} encodes reg twice", def.mnemonic);

        // Implicit operands never need encoding bytes.
        for op in def.implicit {
            assert!(!op.spec.uses_modrm(), "{:?} hides an encoded operand", def.mnemonic);
        }
    }
}

#[test]
fn minimal_encodings_decode_exactly() {
    let runs = [
        (&*CASES_LONG, Decoder::long()),
        (&*CASES_PROTECTED, Decoder::protected()),
    ];

    for (cases, decoder) in runs {
        for case in cases.iter() {
            let instr = match decoder.decode_slice(&case.bytes) {
                Ok(instr) => instr,
                Err(err) => panic!(
                    "{:?} failed to decode from {:02x?}: {:?}",
                    case.def.mnemonic, case.bytes, err
                ),
            };
            assert_eq!(
                instr.mnemonic(),
                case.def.mnemonic,
                "for {:02x?} under {:?}",
                case.bytes,
                decoder.mode()
            );
            assert!(instr.len() <= crate::MAX_INSTRUCTION_LEN);

            // Re-decode from exactly the consumed bytes: same instruction,
            // and the field extents partition it.
            let exact = &case.bytes[..instr.len()];
            let again = decoder.decode_slice(exact).expect("exact re-decode");
            assert_eq!(again.mnemonic(), instr.mnemonic());
            assert_eq!(again.len(), exact.len());
            super::assert_partition(&again);
        }
    }
}

#[test]
fn truncating_any_encoding_is_a_short_buffer() {
    let runs = [
        (&*CASES_LONG, Decoder::long()),
        (&*CASES_PROTECTED, Decoder::protected()),
    ];

    for (cases, decoder) in runs {
        for case in cases.iter() {
            let Ok(instr) = decoder.decode_slice(&case.bytes) else {
                continue;
            };
            let exact = &case.bytes[..instr.len()];
            for cut in 1..exact.len() {
                match decoder.decode_slice(&exact[..cut]) {
                    Ok(other) => panic!(
                        "truncated {:?} reinterpreted as {:?} from {:02x?}",
                        case.def.mnemonic,
                        other.mnemonic(),
                        &exact[..cut]
                    ),
                    Err(err) => assert_eq!(
                        err.kind(),
                        ErrorKind::BufferTooSmall,
                        "truncating {:02x?} at {}",
                        exact,
                        cut
                    ),
                }
            }
        }
    }
}

#[test]
fn mode_reclaimed_slots_split_the_case_sets() {
    let long_mnemonics: std::collections::HashSet<_> =
        CASES_LONG.iter().map(|c| c.def.mnemonic).collect();
    assert!(long_mnemonics.contains(&crate::Mnemonic::MOVSXD));
    assert!(!long_mnemonics.contains(&crate::Mnemonic::ARPL));
    assert!(!long_mnemonics.contains(&crate::Mnemonic::PUSHA));

    let protected_mnemonics: std::collections::HashSet<_> =
        CASES_PROTECTED.iter().map(|c| c.def.mnemonic).collect();
    assert!(protected_mnemonics.contains(&crate::Mnemonic::ARPL));
    assert!(protected_mnemonics.contains(&crate::Mnemonic::PUSHA));
    assert!(!protected_mnemonics.contains(&crate::Mnemonic::MOVSXD));
    assert!(!protected_mnemonics.contains(&crate::Mnemonic::CMPXCHG16B));
}
