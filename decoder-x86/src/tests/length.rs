use super::{decode64, test_too_small};
use crate::Decoder;
use decoder::{Decoded, ErrorKind};

#[test]
fn fifteen_bytes_is_the_ceiling() {
    // 5 redundant 66 prefixes + rex.w + b8 + 8 immediate bytes = 15.
    let mut data = vec![0x66; 5];
    data.extend_from_slice(&[0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(data.len(), 15);
    let instr = decode64(&data);
    assert_eq!(instr.len(), 15);
    super::assert_partition(&instr);

    // One more pad prefix pushes an otherwise-valid encoding to 16.
    let mut data = vec![0x66; 6];
    data.extend_from_slice(&[0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8]);
    let err = Decoder::long().decode_slice(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthExceeded);
}

#[test]
fn a_prefix_run_with_no_room_for_an_opcode() {
    let err = Decoder::long().decode_slice(&[0x26; 40]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthExceeded);
}

#[test]
fn truncation_yields_buffer_too_small() {
    let encodings: &[&[u8]] = &[
        &[0x01, 0x44, 0x8b, 0x10],
        &[0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8],
        &[0x66, 0x0f, 0x58, 0xc1],
        &[0xc4, 0xe2, 0x69, 0x92, 0x04, 0x48],
        &[0x62, 0xf1, 0x74, 0x1c, 0x58, 0x48, 0x01],
        &[0xff, 0x1d, 0, 0, 0, 0],
        &[0xe8, 0, 0, 0, 0],
        &[0xa1, 8, 7, 6, 5, 4, 3, 2, 1],
        &[0xc8, 0x10, 0x00, 0x02],
        &[0xdd, 0x45, 0x08],
    ];

    for data in encodings {
        // The full encoding decodes to exactly its own length.
        let instr = decode64(data);
        assert_eq!(instr.len(), data.len());

        for cut in 1..data.len() {
            test_too_small(&Decoder::long(), &data[..cut]);
        }
    }
}

#[test]
fn field_extents_partition_every_encoding() {
    let encodings: &[&[u8]] = &[
        &[0x90],
        &[0xf3, 0x90],
        &[0x50],
        &[0x66, 0x50],
        &[0x01, 0xc8],
        &[0x01, 0x44, 0x8b, 0x10],
        &[0x8b, 0x05, 0x78, 0x56, 0x34, 0x12],
        &[0x8b, 0x04, 0x25, 0x78, 0x56, 0x34, 0x12],
        &[0x83, 0xc0, 0xff],
        &[0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8],
        &[0xc8, 0x10, 0x00, 0x02],
        &[0xa1, 8, 7, 6, 5, 4, 3, 2, 1],
        &[0x9a, 0x78, 0x56, 0x34, 0x12, 0x33, 0x00],
        &[0x66, 0x0f, 0x58, 0xc1],
        &[0x0f, 0x01, 0xf8],
        &[0xc5, 0xf0, 0x58, 0xc2],
        &[0xc4, 0xe2, 0x69, 0x92, 0x04, 0x48],
        &[0x62, 0xf1, 0x74, 0x1c, 0x58, 0x48, 0x01],
        &[0xdf, 0xe0],
        &[0xdd, 0x45, 0x08],
        &[0x65, 0x48, 0x8b, 0x04, 0x25, 0, 0, 0, 0],
        &[0xf3, 0xa4],
        &[0x0f, 0x22, 0x45, 0x10],
    ];

    let modes = [Decoder::long(), Decoder::protected()];
    for data in encodings {
        for decoder in &modes {
            if let Ok(instr) = decoder.decode_slice(data) {
                if instr.len() == data.len() {
                    super::assert_partition(&instr);
                }
            }
        }
    }

    // And the 16-bit world.
    let instr = super::decode16(&[0x8b, 0x42, 0x08]);
    super::assert_partition(&instr);
    let instr = super::decode16(&[0x8b, 0x06, 0x34, 0x12]);
    super::assert_partition(&instr);
}

#[test]
fn enter_has_two_immediates_in_one_region() {
    let instr = decode64(&[0xc8, 0x10, 0x00, 0x02]);
    assert_eq!(instr.mnemonic(), crate::Mnemonic::ENTER);
    assert_eq!(instr.layout().imm_offset(), Some(1));
    assert_eq!(instr.layout().imm_len(), 3);
    assert_eq!(instr.operand(0).kind, crate::OperandKind::Immediate { value: 0x10 });
    assert_eq!(instr.operand(1).kind, crate::OperandKind::Immediate { value: 0x02 });
}
