// Unit tests for resolution rules

#[cfg(test)]
mod tests {
    use crate::domain::errors::*;
    use crate::domain::model::*;
    use crate::domain::rules::*;

    const DURATION: f64 = 20.0;
    const FRAME_COUNT: u64 = 600;
    const FPS: f64 = 30.0;

    fn timestamp(text: &str) -> TimeSpec {
        TimeSpec::Timestamp(text.to_string())
    }

    fn resolve(start: TimeSpec, stop: TimeSpec) -> Result<ExtractionRange, DomainError> {
        RangeResolver::resolve(DURATION, FRAME_COUNT, Some(start), Some(stop), Some(FPS))
    }

    #[test]
    fn test_defaults_fill_unset_values() {
        assert_eq!(ParameterDefaults::start_time_or(None), TimeSpec::Seconds(0.0));
        assert_eq!(ParameterDefaults::stop_time_or(20.0, None), TimeSpec::Seconds(20.0));
        assert_eq!(ParameterDefaults::fps_or(29.97, None), 29.97);
    }

    #[test]
    fn test_defaults_keep_requested_values() {
        let start = timestamp("0:00:05");
        assert_eq!(ParameterDefaults::start_time_or(Some(start.clone())), start);
        assert_eq!(ParameterDefaults::stop_time_or(20.0, Some(TimeSpec::Seconds(8.0))), TimeSpec::Seconds(8.0));
        assert_eq!(ParameterDefaults::fps_or(29.97, Some(60.0)), 60.0);
    }

    #[test]
    fn test_stop_sentinel_runs_to_end() {
        let range = resolve(TimeSpec::Seconds(10.0), TimeSpec::Seconds(0.0)).unwrap();

        assert_eq!(range.start().second, 10.0);
        assert_eq!(range.stop().second, 20.0);
        assert_eq!(range.start().frame, 300);
        assert_eq!(range.stop().frame, 600);
        assert_eq!(range.start().timestamp, "0:00:10");
        assert_eq!(range.stop().timestamp, "0:00:20");
        assert_eq!(range.duration_seconds(), 10.0);
    }

    #[test]
    fn test_stop_at_end_prefers_frame_count() {
        // 1001 frames at 29.97 fps round to 33.4s, and 33.4 * 29.97 floors to 1000.
        for stop in [0.0, 33.4] {
            let range = RangeResolver::resolve(
                33.4,
                1001,
                Some(TimeSpec::Seconds(0.0)),
                Some(TimeSpec::Seconds(stop)),
                Some(29.97),
            )
            .unwrap();
            assert_eq!(range.stop().frame, 1001, "stop {}", stop);
        }
    }

    #[test]
    fn test_defaulted_stop_never_passes_last_frame() {
        // 2411 frames at 240 fps round to 10.05s, which would floor to frame 2412.
        let duration = round_hundredths(2411.0 / 240.0);
        let stop = ParameterDefaults::stop_time_or(duration, None);
        let range = RangeResolver::resolve(duration, 2411, Some(TimeSpec::Seconds(0.0)), Some(stop), Some(240.0)).unwrap();
        assert_eq!(range.stop().second, 10.05);
        assert_eq!(range.stop().frame, 2411);

        let near_end =
            RangeResolver::resolve(duration, 2411, Some(TimeSpec::Seconds(10.048)), Some(TimeSpec::Seconds(0.0)), Some(240.0))
                .unwrap();
        assert!(near_end.start().frame <= near_end.stop().frame);
    }

    #[test]
    fn test_timestamps_echo_user_formatting() {
        let range = resolve(timestamp("0:0:05"), timestamp("00:15")).unwrap();

        assert_eq!(range.start().timestamp, "0:0:05");
        assert_eq!(range.stop().timestamp, "00:15");
        assert_eq!(range.start().second, 5.0);
        assert_eq!(range.stop().second, 15.0);
        assert_eq!(range.start().frame, 150);
        assert_eq!(range.stop().frame, 450);
    }

    #[test]
    fn test_numbers_get_computed_timestamps() {
        let range = resolve(TimeSpec::Seconds(2.5), TimeSpec::Seconds(12.0)).unwrap();
        assert_eq!(range.start().timestamp, "0:00:02");
        assert_eq!(range.stop().timestamp, "0:00:12");
        assert_eq!(range.start().frame, 75);
    }

    #[test]
    fn test_stop_may_equal_duration() {
        let range = resolve(TimeSpec::Seconds(0.0), TimeSpec::Seconds(20.0)).unwrap();
        assert_eq!(range.stop().second, 20.0);
        assert_eq!(range.stop().frame, 600);
    }

    #[test]
    fn test_range_errors() {
        let cases = [
            (TimeSpec::Seconds(-1.0), TimeSpec::Seconds(5.0)),
            (TimeSpec::Seconds(5.0), TimeSpec::Seconds(5.0)),
            (TimeSpec::Seconds(8.0), TimeSpec::Seconds(5.0)),
            (TimeSpec::Seconds(0.0), TimeSpec::Seconds(20.5)),
            (timestamp("0:00:30"), TimeSpec::Seconds(0.0)),
            (TimeSpec::Seconds(f64::NAN), TimeSpec::Seconds(5.0)),
        ];
        for (start, stop) in cases {
            let err = resolve(start.clone(), stop.clone()).unwrap_err();
            assert!(matches!(err, DomainError::Range(_)), "{} -> {}: {:?}", start, stop, err);
        }
    }

    #[test]
    fn test_malformed_timestamp_is_format_error() {
        let err = resolve(timestamp("0:99"), TimeSpec::Seconds(5.0)).unwrap_err();
        assert!(matches!(err, DomainError::Format(_)));
    }

    #[test]
    fn test_unprepared_inputs_are_preparation_errors() {
        let start = Some(TimeSpec::Seconds(0.0));
        let stop = Some(TimeSpec::Seconds(5.0));

        for (start, stop, fps) in [
            (None, stop.clone(), Some(FPS)),
            (start.clone(), None, Some(FPS)),
            (start.clone(), stop.clone(), None),
        ] {
            let err = RangeResolver::resolve(DURATION, FRAME_COUNT, start, stop, fps).unwrap_err();
            assert!(matches!(err, DomainError::Preparation(_)));
            assert!(!err.is_user_error());
        }
    }

    #[test]
    fn test_frames_follow_floor_of_seconds() {
        let steps = [0.0, 0.01, 1.0 / 3.0, 0.5, 7.77, 12.345, 19.99];
        for (i, &start) in steps.iter().enumerate() {
            for &stop in &steps[i + 1..] {
                let range = resolve(TimeSpec::Seconds(start), TimeSpec::Seconds(stop)).unwrap();
                assert_eq!(range.start().frame, (start * FPS).floor() as u64);
                assert!(range.start().frame <= range.stop().frame);
            }
        }
    }

    #[test]
    fn test_dimensions_default_to_video() {
        let video = Dimensions::new(1920, 1080).unwrap();
        assert_eq!(DimensionResolver::resolve(video, 1.0, None).unwrap(), video);
    }

    #[test]
    fn test_dimensions_resize_video() {
        let video = Dimensions::new(1920, 1080).unwrap();
        assert_eq!(
            DimensionResolver::resolve(video, 0.5, None).unwrap(),
            Dimensions::new(960, 540).unwrap()
        );
    }

    #[test]
    fn test_dimensions_resize_explicit_and_truncate() {
        let video = Dimensions::new(1920, 1080).unwrap();
        let explicit = Dimensions::new(641, 481).unwrap();
        assert_eq!(DimensionResolver::resolve(video, 1.0, Some(explicit)).unwrap(), explicit);
        assert_eq!(
            DimensionResolver::resolve(video, 0.5, Some(explicit)).unwrap(),
            Dimensions::new(320, 240).unwrap()
        );
        assert_eq!(
            DimensionResolver::resolve(video, 1.5, Some(explicit)).unwrap(),
            Dimensions::new(961, 721).unwrap()
        );
    }

    #[test]
    fn test_dimensions_shrunk_to_nothing_are_rejected() {
        let video = Dimensions::new(1920, 1080).unwrap();
        let err = DimensionResolver::resolve(video, 0.0001, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_expected_count() {
        assert_eq!(FrameCountEstimator::expected_count(Some(0), Some(300), Some(1)).unwrap(), 300);
        assert_eq!(FrameCountEstimator::expected_count(Some(0), Some(300), Some(7)).unwrap(), 43);
        assert_eq!(FrameCountEstimator::expected_count(Some(300), Some(600), Some(300)).unwrap(), 1);
        assert_eq!(FrameCountEstimator::expected_count(Some(10), Some(10), Some(3)).unwrap(), 0);
    }

    #[test]
    fn test_expected_count_errors() {
        for (start, stop, rate) in [
            (Some(0), Some(300), Some(0)),
            (None, Some(300), Some(1)),
            (Some(0), None, Some(1)),
            (Some(0), Some(300), None),
            (Some(301), Some(300), Some(1)),
        ] {
            let err = FrameCountEstimator::expected_count(start, stop, rate).unwrap_err();
            assert!(matches!(err, DomainError::Preparation(_)));
        }
    }
}
