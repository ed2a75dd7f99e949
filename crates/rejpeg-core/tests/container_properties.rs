use hex_literal::hex;

use rejpeg_core::{
    assemble, find_sof0, patch, read_dimensions, BitstreamSource, Dimensions, RejpegError,
};

fn template() -> Vec<u8> {
    hex!("0000000000 FFC0 0011 08 0000 0000 03 012200 021101 031101").to_vec()
}

#[test]
fn should_reproduce_the_documented_container() {
    let header = patch(template(), 96, 64).unwrap();
    // marker at 5, so height at 10..12 and width at 12..14
    assert_eq!(&header[10..12], &hex!("0040"));
    assert_eq!(&header[12..14], &hex!("0060"));

    let out = assemble(
        template(),
        &BitstreamSource::HexBytes("FFD8\nA1B2\n"),
        Some(Dimensions::new(96, 64).unwrap()),
    )
    .unwrap();

    let mut expected = header;
    expected.extend_from_slice(&hex!("FFD8 A1B2 FFD9"));
    assert_eq!(out, expected);
}

#[test]
fn should_decode_a_word_line_big_endian() {
    let out = assemble(vec![], &BitstreamSource::HexWords("0A0B0C0D"), None).unwrap();
    assert_eq!(out, hex!("0A0B0C0D FFD9"));
}

#[test]
fn should_write_the_height_five_bytes_behind_the_marker_wherever_it_is() {
    for k in [0usize, 1, 7, 100] {
        let mut t = vec![0x11; k];
        t.extend_from_slice(&hex!("FFC0 0011 08 0000 0000 03"));
        assert_eq!(find_sof0(&t), Some(k));

        let patched = patch(t, 0x0102, 0x0304).unwrap();
        assert_eq!(&patched[k + 5..k + 9], &hex!("0304 0102"));
        assert!(patched[..k].iter().all(|&b| b == 0x11));
    }
}

#[test]
fn should_roundtrip_sizes_across_the_whole_range() {
    let sizes = (0..16)
        .map(|i| 1u16 << i)
        .chain([3, 255, 1000, 4095, 65534, 65535]);
    for w in sizes.clone() {
        for h in sizes.clone() {
            let patched = patch(template(), w, h).unwrap();
            assert_eq!(read_dimensions(&patched).unwrap(), (w, h));
        }
    }
}

#[test]
fn should_terminate_exactly_once() {
    let with_eoi = assemble(template(), &BitstreamSource::HexBytes("00\nFFD9"), None).unwrap();
    let without = assemble(template(), &BitstreamSource::HexBytes("00\nFFD8"), None).unwrap();

    assert_eq!(with_eoi.len(), template().len() + 3);
    assert_eq!(without.len(), template().len() + 5);
    assert!(with_eoi.ends_with(&hex!("00 FFD9")));
    assert!(without.ends_with(&hex!("FFD8 FFD9")));
}

#[test]
fn should_not_emit_anything_for_a_broken_dump() {
    let dump = "FFD8\nA1B2\nnot hex\nC3D4\n";
    let result = assemble(template(), &BitstreamSource::HexBytes(dump), None);

    assert!(matches!(result, Err(RejpegError::DecodeError { line: 3, .. })));
}

#[test]
fn should_fail_loudly_on_headers_without_sof0() {
    let header = hex!("FFD8 FFDB 0043 00 FFC4 001F").to_vec();
    assert!(matches!(
        patch(header.clone(), 8, 8),
        Err(RejpegError::MarkerNotFound)
    ));
    assert!(matches!(
        assemble(
            header,
            &BitstreamSource::Raw(&[]),
            Some(Dimensions::new(8, 8).unwrap())
        ),
        Err(RejpegError::MarkerNotFound)
    ));
}
