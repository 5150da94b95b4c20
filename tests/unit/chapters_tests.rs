/*!
 * Tests for window segmentation and chapter listing rendering
 */

use ytchapters::chapters::{ChapterList, segment_windows};
use ytchapters::errors::TimecodeError;
use ytchapters::transcript::TimeWindow;

#[test]
fn test_segmentWindows_exactDivision_shouldProduceEqualWindows() {
    let windows = segment_windows(600.0, 180.0, 30.0).unwrap();

    // 180+180+180+60; the 60s tail is above the 30s minimum and stays
    assert_eq!(windows.len(), 4);
    assert_eq!(windows[0].start, 0.0);
    assert_eq!(windows[0].end, 180.0);
    assert_eq!(windows[3].start, 540.0);
    assert_eq!(windows[3].end, 600.0);
}

#[test]
fn test_segmentWindows_shortTail_shouldMergeIntoPrevious() {
    // 370 = 180 + 180 + 10; the 10s tail merges into the second window
    let windows = segment_windows(370.0, 180.0, 30.0).unwrap();

    assert_eq!(windows.len(), 2);
    assert_eq!(windows[1].start, 180.0);
    assert_eq!(windows[1].end, 370.0);
}

#[test]
fn test_segmentWindows_singleShortVideo_shouldKeepOneWindow() {
    // A lone window shorter than the minimum is never merged away
    let windows = segment_windows(20.0, 180.0, 30.0).unwrap();

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, 0.0);
    assert_eq!(windows[0].end, 20.0);
}

#[test]
fn test_segmentWindows_zeroDuration_shouldProduceNoWindows() {
    assert!(segment_windows(0.0, 180.0, 30.0).unwrap().is_empty());
}

#[test]
fn test_segmentWindows_contiguity_shouldCoverWholeDuration() {
    let duration = 1234.5;
    let windows = segment_windows(duration, 100.0, 30.0).unwrap();

    assert_eq!(windows[0].start, 0.0);
    assert_eq!(windows[windows.len() - 1].end, duration);
    for pair in windows.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_segmentWindows_invalidInputs_shouldFail() {
    assert!(matches!(
        segment_windows(-10.0, 180.0, 30.0),
        Err(TimecodeError::InvalidSeconds(_))
    ));
    assert!(matches!(
        segment_windows(600.0, 0.0, 30.0),
        Err(TimecodeError::InvalidSeconds(_))
    ));
    assert!(segment_windows(f64::NAN, 180.0, 30.0).is_err());
}

#[test]
fn test_chapterList_render_shouldProduceOneLinePerChapter() {
    let mut list = ChapterList::new();
    list.push(TimeWindow::new(0.0, 180.0).unwrap(), "Opening Remarks And Welcome");
    list.push(TimeWindow::new(180.0, 360.0).unwrap(), "Deep Dive Into The Topic");

    let rendered = list.render().unwrap();

    assert_eq!(
        rendered,
        "00:00 Opening Remarks And Welcome\n03:00 Deep Dive Into The Topic"
    );
}

#[test]
fn test_chapterList_render_shouldTrimTitles() {
    let mut list = ChapterList::new();
    list.push(TimeWindow::new(0.0, 60.0).unwrap(), "  Padded Title \n");

    assert_eq!(list.render().unwrap(), "00:00 Padded Title");
}

#[test]
fn test_chapterList_render_hourLongVideo_shouldUseHourTimestamps() {
    let mut list = ChapterList::new();
    list.push(TimeWindow::new(3600.0, 3780.0).unwrap(), "One Hour In");

    assert_eq!(list.render().unwrap(), "01:00:00 One Hour In");
}

#[test]
fn test_chapterList_emptyList_shouldRenderEmptyString() {
    let list = ChapterList::new();

    assert!(list.is_empty());
    assert_eq!(list.render().unwrap(), "");
}
