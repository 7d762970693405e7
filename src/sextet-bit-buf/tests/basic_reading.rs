use sextet_bit_buf::{alphabet, Decoder, Error};

// V      G      h      n      c      y      4
// 010101 000110 100001 100111 011100 110010 1110(00)
const INPUT: &str = "VGhncy4=";

fn decode_bytes(decoder: &mut Decoder) -> Result<String, Error> {
    let mut out = String::new();
    while let Some(byte) = decoder.pop_u8()? {
        out.push(byte as char);
    }
    Ok(out)
}

#[test]
fn read_bytes() -> Result<(), Error> {
    let mut decoder = Decoder::new();

    decoder.load("R29vZCBtb3JuaW5nIQ==", None)?;
    assert_eq!(decode_bytes(&mut decoder)?, "Good morning!");

    decoder.load("SGVsbG8gV29ybGQu", None)?;
    assert_eq!(decode_bytes(&mut decoder)?, "Hello World.");

    Ok(())
}

#[test]
fn read_single_bits() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    for expected in [0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0] {
        assert_eq!(decoder.pop(1)?, Some(expected));
    }
    assert_eq!(decoder.position(), 12);

    Ok(())
}

#[test]
fn read_growing_widths() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    assert_eq!(decoder.pop(1)?, Some(0));
    assert_eq!(decoder.pop(1)?, Some(1));
    assert_eq!(decoder.pop(2)?, Some(1));
    assert_eq!(decoder.pop(3)?, Some(2));
    assert_eq!(decoder.pop(4)?, Some(3));
    assert_eq!(decoder.pop(5)?, Some(8));
    assert_eq!(decoder.pop(6)?, Some(25));
    assert_eq!(decoder.pop(7)?, Some(110));
    assert_eq!(decoder.pop(8)?, Some(101));
    assert_eq!(decoder.pop(9)?, Some(6));
    assert_eq!(decoder.pop(10)?, None);

    Ok(())
}

#[test]
fn read_full_width() -> Result<(), Error> {
    let mut decoder = Decoder::new();

    decoder.load(INPUT, None)?;
    assert_eq!(decoder.pop(32)?, Some(1416128371));

    decoder.load(INPUT, None)?;
    assert_eq!(decoder.pop(8)?, Some(84));
    assert_eq!(decoder.pop(32)?, Some(1751610158));
    assert_eq!(decoder.pop(1)?, None);

    decoder.offset(6);
    assert_eq!(decoder.pop(6)?, Some(6));

    Ok(())
}

#[test]
fn read_empty() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    assert_eq!(decoder.pop(1)?, None);

    decoder.load("", None)?;
    assert_eq!(decoder.total_bits(), 0);
    assert_eq!(decoder.pop(8)?, None);

    Ok(())
}

#[test]
fn read_at_offsets() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    decoder.offset(6);
    assert_eq!(decoder.pop(6)?, Some(6));

    decoder.offset(30);
    assert_eq!(decoder.pop(6)?, Some(50));

    decoder.offset(3);
    assert_eq!(decoder.position(), 3);
    assert_eq!(decoder.remaining_bits(), 37);
    assert_eq!(decoder.pop(5)?, Some(0b10100));

    Ok(())
}

#[test]
fn rewind_restores_start() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    let first = decoder.pop(13)?;
    decoder.rewind();
    assert_eq!(decoder.position(), 0);
    assert_eq!(decoder.remaining_bits(), 40);
    assert_eq!(decoder.pop(13)?, first);

    Ok(())
}

#[test]
fn clamp_to_remaining_bits() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    decoder.offset(15);
    assert_eq!(decoder.remaining_bits(), 25);
    assert_eq!(decoder.pop(32)?, Some(6779694));
    assert_eq!(decoder.remaining_bits(), 0);
    assert_eq!(decoder.position(), 40);
    assert_eq!(decoder.pop(1)?, None);

    Ok(())
}

#[test]
fn offset_past_end() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    decoder.offset(10_000_000);
    assert_eq!(decoder.remaining_bits(), 0);
    assert_eq!(decoder.pop(1)?, None);

    // Padding bits of the last symbol are out of reach, too.
    decoder.offset(41);
    assert_eq!(decoder.pop(1)?, None);

    Ok(())
}

#[test]
fn explicit_bit_count() -> Result<(), Error> {
    let mut decoder = Decoder::new();

    // 111(000) with 3 meaningful bits.
    decoder.load("4===", Some(3))?;
    assert_eq!(decoder.total_bits(), 3);
    assert_eq!(decoder.pop(8)?, Some(7));
    assert_eq!(decoder.pop(8)?, None);

    // 110001 100101 011100 100010 111101 010011 100100 000001 110111 ...
    decoder.load("xlci9TkB3v//w===", Some(74))?;
    assert_eq!(decoder.pop(19)?, Some(406201));
    assert_eq!(decoder.pop(22)?, Some(387698));
    assert_eq!(decoder.pop(1)?, Some(0));
    assert_eq!(decoder.pop(8)?, Some(7));
    assert_eq!(decoder.pop(8)?, Some(123));
    assert_eq!(decoder.pop(16)?, Some(65535));
    assert_eq!(decoder.pop(1)?, None);

    assert_eq!(
        decoder.load("4===", Some(7)),
        Err(Error::BitsOutOfRange {
            bits: 7,
            available: 6
        })
    );

    Ok(())
}

#[test]
fn infer_padding() -> Result<(), Error> {
    let mut decoder = Decoder::new();

    decoder.load("VA==", None)?;
    assert_eq!(decoder.total_bits(), 8);

    decoder.load("VGg=", None)?;
    assert_eq!(decoder.total_bits(), 16);

    decoder.load("VGhn", None)?;
    assert_eq!(decoder.total_bits(), 24);

    // A lone symbol cannot complete a byte and is dropped.
    decoder.load("4===", None)?;
    assert_eq!(decoder.total_bits(), 0);
    assert_eq!(decoder.pop(1)?, None);

    decoder.load("LgAuI===", None)?;
    assert_eq!(decoder.total_bits(), 24);

    Ok(())
}

#[test]
fn reject_invalid_input() -> Result<(), Error> {
    let mut decoder = Decoder::new();

    assert_eq!(
        decoder.load("VGhncy4", None),
        Err(Error::InvalidLength(7))
    );

    decoder.load("@@@@@@==", None)?;
    assert_eq!(
        decoder.pop(8),
        Err(Error::InvalidSymbol {
            symbol: b'@',
            position: 0
        })
    );

    // The cursor stays in place after an error.
    assert_eq!(decoder.position(), 0);
    assert_eq!(decoder.remaining_bits(), 32);

    decoder.load("VG@n", None)?;
    assert_eq!(decoder.pop(8)?, Some(84));
    assert_eq!(
        decoder.pop(8),
        Err(Error::InvalidSymbol {
            symbol: b'@',
            position: 2
        })
    );
    assert_eq!(decoder.position(), 8);

    assert_eq!(decoder.pop(0), Err(Error::InvalidBitWidth(0)));
    assert_eq!(decoder.pop(33), Err(Error::InvalidBitWidth(33)));

    Ok(())
}

#[test]
fn failed_load_keeps_stream() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;
    decoder.offset(8);

    assert!(decoder.load("abc", None).is_err());
    assert_eq!(decoder.position(), 8);
    assert_eq!(decoder.pop(8)?, Some(104));

    Ok(())
}

#[test]
fn iterate_values() -> Result<(), Error> {
    let mut decoder = Decoder::new();
    decoder.load(INPUT, None)?;

    let bytes = decoder.values(8).collect::<Result<Vec<_>, _>>()?;
    assert_eq!(bytes, [84, 104, 103, 115, 46]);

    decoder.load("VG@n", None)?;
    let mut values = decoder.values(8);
    assert_eq!(values.next(), Some(Ok(84)));
    assert!(matches!(values.next(), Some(Err(Error::InvalidSymbol { .. }))));
    assert_eq!(values.next(), None);

    Ok(())
}

#[test]
fn read_url_safe() -> Result<(), Error> {
    let mut decoder = Decoder::with_alphabet(alphabet::URL_SAFE);
    decoder.load("-_8=", None)?;
    assert_eq!(decoder.pop(16)?, Some(0xFBFF));

    let mut decoder = Decoder::new();
    decoder.load("-_8=", None)?;
    assert!(matches!(decoder.pop(16), Err(Error::InvalidSymbol { .. })));

    Ok(())
}
