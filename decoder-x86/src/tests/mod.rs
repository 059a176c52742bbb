#![cfg(test)]

mod flags;
mod length;
mod modrm;
mod opcode;
mod operand;
mod prefix;
mod tables;
mod validity;

use crate::{Decoder, Instruction, Mnemonic};
use decoder::{Decoded, ErrorKind};

fn decode_with(decoder: &Decoder, data: &[u8]) -> Instruction {
    match decoder.decode_slice(data) {
        Ok(instr) => {
            // An exact encoding must be consumed exactly: no trailing bytes.
            assert_eq!(
                instr.len(),
                data.len(),
                "consumed {} of {} bytes for {:02x?}",
                instr.len(),
                data.len(),
                data
            );
            instr
        }
        Err(err) => panic!("decode error {:?} for {:02x?}", err, data),
    }
}

fn decode64(data: &[u8]) -> Instruction {
    decode_with(&Decoder::long(), data)
}

fn decode32(data: &[u8]) -> Instruction {
    decode_with(&Decoder::protected(), data)
}

fn decode16(data: &[u8]) -> Instruction {
    decode_with(&Decoder::real(), data)
}

fn test_mn(decoder: &Decoder, data: &[u8], mnemonic: Mnemonic) -> Instruction {
    let instr = decode_with(decoder, data);
    assert_eq!(instr.mnemonic(), mnemonic, "for {:02x?}", data);
    instr
}

fn test_invalid(decoder: &Decoder, data: &[u8]) {
    match decoder.decode_slice(data) {
        Ok(instr) => panic!("decoded {:?} from {:02x?}", instr.mnemonic(), data),
        Err(err) => assert_eq!(err.kind(), ErrorKind::InvalidEncoding, "for {:02x?}", data),
    }
}

fn test_too_small(decoder: &Decoder, data: &[u8]) {
    match decoder.decode_slice(data) {
        Ok(instr) => panic!("decoded {:?} from truncated {:02x?}", instr.mnemonic(), data),
        Err(err) => assert_eq!(err.kind(), ErrorKind::BufferTooSmall, "for {:02x?}", data),
    }
}

/// The raw field extents must partition the encoded bytes exactly.
fn assert_partition(instr: &Instruction) {
    let layout = instr.layout();
    let mut coverage = [0u8; crate::MAX_INSTRUCTION_LEN];

    let mut cover = |off: u8, len: u8| {
        for i in off..off + len {
            coverage[i as usize] += 1;
        }
    };

    cover(0, layout.prefix_len());
    cover(layout.opcode_offset(), layout.opcode_len());
    if let Some(off) = layout.modrm_offset() {
        cover(off, 1);
    }
    if let Some(off) = layout.sib_offset() {
        cover(off, 1);
    }
    if let Some(off) = layout.disp_offset() {
        cover(off, layout.disp_len());
    }
    if let Some(off) = layout.imm_offset() {
        cover(off, layout.imm_len());
    }

    assert_eq!(layout.extent(), instr.len(), "field extents for {:?}", instr.mnemonic());
    for (i, count) in coverage.iter().enumerate() {
        let expected = if i < instr.len() { 1 } else { 0 };
        assert_eq!(
            *count, expected,
            "byte {} covered {} times in {:?}",
            i, count, instr.mnemonic()
        );
    }
}
