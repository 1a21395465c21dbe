mod tests {
    use strip_animations::{AnimationId, AnimationSlot, color::WHITE};

    #[test]
    fn test_animation_id_parse_fire() {
        assert_eq!(AnimationId::parse_from_str("fire"), Some(AnimationId::Fire));
    }

    #[test]
    fn test_animation_id_from_raw_full_fft() {
        // FullFft is the last id, 16.
        assert_eq!(AnimationId::from_raw(16), Some(AnimationId::FullFft));
        assert_eq!(AnimationId::from_raw(17), None);
    }

    #[test]
    fn test_animation_id_as_str_rainbow_glitter() {
        assert_eq!(AnimationId::RainbowGlitter.as_str(), "rainbow_glitter");
    }

    #[test]
    fn test_animation_id_parse_unknown() {
        assert_eq!(AnimationId::parse_from_str("lava_lamp"), None);
        assert_eq!(AnimationId::parse_from_str(""), None);
    }

    #[test]
    fn test_animation_ids_roundtrip() {
        for (raw, id) in AnimationId::ALL.into_iter().enumerate() {
            let raw = u8::try_from(raw).unwrap();
            assert_eq!(id as u8, raw);
            assert_eq!(AnimationId::from_raw(raw), Some(id));
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_rainbow_slots_keep_their_id() {
        let plain: AnimationSlot<16> = AnimationId::Rainbow.to_slot(WHITE);
        let glitter: AnimationSlot<16> = AnimationId::RainbowGlitter.to_slot(WHITE);
        assert_eq!(plain.id(), AnimationId::Rainbow);
        assert_eq!(glitter.id(), AnimationId::RainbowGlitter);
    }

    #[test]
    fn test_audio_ids() {
        assert!(AnimationId::FftOctaves.uses_audio());
        assert!(AnimationId::RmsConfetti.uses_audio());
        assert!(!AnimationId::Confetti.uses_audio());
    }
}
