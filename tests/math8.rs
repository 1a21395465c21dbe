mod tests {
    use strip_animations::math8::{
        add_mod, blend8, qadd8, qsub8, scale8, scale8_video, sin8, triwave8, unit_to_u8,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_keeps_embers() {
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(0, 200), 0);
        assert_eq!(scale8_video(200, 0), 0);
        assert_eq!(scale8_video(255, 255), 255);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_saturating_arithmetic() {
        assert_eq!(qadd8(250, 20), 255);
        assert_eq!(qadd8(100, 20), 120);
        assert_eq!(qsub8(5, 20), 0);
        assert_eq!(qsub8(20, 5), 15);
    }

    #[test]
    fn test_add_mod() {
        assert_eq!(add_mod(58, 3, 60), 1);
        assert_eq!(add_mod(0, 0, 60), 0);
        assert_eq!(add_mod(125, 5, 60), 10);
        assert_eq!(add_mod(3, 3, 0), 0);
    }

    #[test]
    fn test_sin8_landmarks() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_triwave8() {
        assert_eq!(triwave8(0), 0);
        assert_eq!(triwave8(64), 128);
        assert_eq!(triwave8(192), 126);
    }

    #[test]
    fn test_unit_to_u8_clamps() {
        assert_eq!(unit_to_u8(-0.5), 0);
        assert_eq!(unit_to_u8(0.0), 0);
        assert_eq!(unit_to_u8(1.0), 255);
        assert_eq!(unit_to_u8(3.0), 255);
    }
}
