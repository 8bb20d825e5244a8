use proptest::prelude::*;
use rust_aztec::encoder::modes;
use rust_aztec::encoder::reed_solomon::ReedSolomonEncoder;
use rust_aztec::encoder::stuffing::{has_degenerate_word, stuff_and_pad};
use rust_aztec::{AztecEncoder, BitBuffer, EncoderConfig};

fn encoder() -> AztecEncoder {
    AztecEncoder::with_config(
        EncoderConfig::default()
            .with_ecc_percent(23)
            .with_min_ecc_codewords(3)
            .with_compact(true),
    )
}

proptest! {
    #[test]
    fn test_encoding_is_deterministic(input in prop::collection::vec(any::<u8>(), 0..300)) {
        let a = encoder().encode(&input).unwrap();
        let b = encoder().encode(&input).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_stuffing_length_and_degeneracy(
        bits in prop::collection::vec(any::<bool>(), 0..200),
        width in prop::sample::select(vec![6usize, 8, 10, 12]),
    ) {
        let input: BitBuffer = bits.into_iter().collect();
        let out = stuff_and_pad(&input, width);
        prop_assert!(!out.is_empty());
        prop_assert_eq!(out.len() % width, 0);
        prop_assert!(!has_degenerate_word(&out, width));
        // at most one stuffed bit per word, plus the final padding
        prop_assert!(out.len() >= input.len());
        prop_assert!(out.len() <= input.len() + input.len() / (width - 1) + width);
    }

    #[test]
    fn test_reed_solomon_codewords_check(
        width in prop::sample::select(vec![4usize, 6, 8, 10, 12]),
        raw in prop::collection::vec(any::<u16>(), 1..60),
        parity in 1usize..24,
    ) {
        let mask = (1u16 << width) - 1;
        let data: Vec<u16> = raw.iter().map(|w| w & mask).collect();
        let rs = ReedSolomonEncoder::new(width).unwrap();
        let codeword = rs.encode(&data, parity);
        prop_assert_eq!(codeword.len(), data.len() + parity);
        prop_assert!(rs.check(&codeword, parity));
    }

    #[test]
    fn test_upper_text_costs_five_bits(input in "[A-Z ]{0,80}") {
        prop_assert_eq!(modes::encode(input.as_bytes()).len(), input.len() * 5);
    }

    #[test]
    fn test_symbol_matches_table_and_validates(input in prop::collection::vec(any::<u8>(), 0..400)) {
        let code = encoder().encode(&input).unwrap();
        prop_assert_eq!(code.size(), code.spec().size());
        prop_assert_eq!(code.modules().height(), code.size());
        prop_assert_eq!(code.codewords().len(), code.spec().total_codewords());
        prop_assert!(code.data_codewords() <= code.form().max_data_codewords());
        let rs = ReedSolomonEncoder::new(code.codeword_width()).unwrap();
        prop_assert!(rs.check(code.codewords(), code.parity_codewords()));
    }
}
