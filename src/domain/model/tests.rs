// Unit tests for domain models

#[cfg(test)]
mod tests {
    use crate::domain::errors::*;
    use crate::domain::model::*;
    use std::path::Path;

    fn hd() -> Dimensions {
        Dimensions::new(1920, 1080).unwrap()
    }

    #[test]
    fn test_time_spec_parse_seconds() {
        assert_eq!(TimeSpec::parse("90").unwrap(), TimeSpec::Seconds(90.0));
        assert_eq!(TimeSpec::parse("12.5").unwrap(), TimeSpec::Seconds(12.5));
        assert_eq!(TimeSpec::parse("-3").unwrap(), TimeSpec::Seconds(-3.0));
    }

    #[test]
    fn test_time_spec_parse_timestamp_keeps_formatting() {
        let time = TimeSpec::parse(" 0:1:30 ").unwrap();
        assert_eq!(time, TimeSpec::Timestamp("0:1:30".to_string()));
        assert!(time.is_timestamp());
        assert_eq!(time.to_seconds().unwrap(), 90.0);
    }

    #[test]
    fn test_time_spec_parse_invalid() {
        assert!(matches!(TimeSpec::parse("abc"), Err(DomainError::Format(_))));
        assert!(matches!(TimeSpec::parse("0:75"), Err(DomainError::Format(_))));
        assert!(matches!(TimeSpec::parse(""), Err(DomainError::Format(_))));
        assert!(matches!(TimeSpec::parse("inf"), Err(DomainError::Format(_))));
    }

    #[test]
    fn test_time_spec_display_and_serde() {
        assert_eq!(TimeSpec::from(10u32).to_string(), "10");
        assert_eq!(TimeSpec::Timestamp("0:00:10".to_string()).to_string(), "0:00:10");
        assert_eq!(serde_json::to_string(&TimeSpec::Seconds(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::from_str::<TimeSpec>("\"1:00\"").unwrap(),
            TimeSpec::Timestamp("1:00".to_string())
        );
    }

    #[test]
    fn test_dimensions_invalid() {
        assert!(Dimensions::new(0, 1080).is_err());
        assert!(Dimensions::new(1920, 0).is_err());
        assert_eq!(hd().to_string(), "1920x1080");
        assert_eq!((hd().width(), hd().height()), (1920, 1080));
    }

    #[test]
    fn test_dimensions_deserialize_validates() {
        let dims: Dimensions = serde_json::from_str(r#"{"width":640,"height":360}"#).unwrap();
        assert_eq!(dims, Dimensions::new(640, 360).unwrap());
        assert!(serde_json::from_str::<Dimensions>(r#"{"width":0,"height":360}"#).is_err());
    }

    #[test]
    fn test_video_metadata_derives_duration() {
        let video = VideoMetadata::new(hd(), 30.0, 600, "mp4").unwrap();
        assert_eq!(video.duration_seconds, 20.0);
        assert_eq!(video.duration_timestamp, "0:00:20");
        assert_eq!(video.format_suffix, "mp4");
    }

    #[test]
    fn test_video_metadata_rounds_duration() {
        let video = VideoMetadata::new(hd(), 29.97, 1000, "mov").unwrap();
        assert_eq!(video.duration_seconds, 33.37);
        assert_eq!(video.duration_timestamp, "0:00:33");
    }

    #[test]
    fn test_video_metadata_invalid() {
        assert!(VideoMetadata::new(hd(), 0.0, 10, "mp4").is_err());
        assert!(VideoMetadata::new(hd(), f64::NAN, 10, "mp4").is_err());
    }

    #[test]
    fn test_suffix_of() {
        assert_eq!(VideoMetadata::suffix_of(Path::new("/videos/a.mkv")), "mkv");
        assert_eq!(VideoMetadata::suffix_of(Path::new("/videos/noext")), "");
    }

    #[test]
    fn test_formats_parse() {
        assert_eq!("MP3".parse::<AudioFormat>().unwrap(), AudioFormat::Mp3);
        assert_eq!(".wav".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert!("flac".parse::<AudioFormat>().is_err());

        assert_eq!("jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("TIF".parse::<ImageFormat>().unwrap(), ImageFormat::Tif);
        assert!("gif".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_rotation() {
        for degrees in [0, 90, 180, 270] {
            assert_eq!(Rotation::new(degrees).unwrap().degrees(), degrees);
        }
        assert!(Rotation::new(45).is_err());
        assert!("360".parse::<Rotation>().is_err());
        assert!("left".parse::<Rotation>().is_err());
        assert_eq!(serde_json::to_string(&Rotation::new(90).unwrap()).unwrap(), "90");
        assert!(serde_json::from_str::<Rotation>("45").is_err());
    }

    #[test]
    fn test_extraction_method_parse() {
        assert_eq!("Frames".parse::<ExtractionMethod>().unwrap(), ExtractionMethod::Frames);
        assert!("thumbnail".parse::<ExtractionMethod>().is_err());
        assert!(!ExtractionMethod::Audio.has_dimensions());
        assert!(ExtractionMethod::Gif.has_dimensions());
    }

    #[test]
    fn test_request_output_format() {
        let mut request = ExtractionRequest::new(ExtractionMethod::Audio, "clip.mov");
        assert_eq!(request.output_format(), "mp3");
        request.audio_format = AudioFormat::Ogg;
        assert_eq!(request.output_format(), "ogg");

        request.method = ExtractionMethod::Clip;
        assert_eq!(request.output_format(), "mp4");
        request.method = ExtractionMethod::Gif;
        assert_eq!(request.output_format(), "gif");
        request.method = ExtractionMethod::Frames;
        assert_eq!(request.output_format(), "jpg");
    }
}
