use frameruler::{channel, FramePoll, FrameSource, VideoFrame};

fn frame(w: u32, h: u32) -> VideoFrame {
    VideoFrame::new(w, h, vec![0; (w * h * 3) as usize])
}

#[test]
fn channel_delivers_frames_in_order() {
    let (sink, mut source) = channel();
    sink.send(frame(4, 2)).unwrap();
    sink.send(frame(8, 8)).unwrap();

    match source.poll_frame() {
        FramePoll::Frame(f) => assert_eq!(f.size(), [4, 2]),
        other => panic!("expected frame, got {:?}", other),
    }
    match source.poll_frame() {
        FramePoll::Frame(f) => assert_eq!(f.size(), [8, 8]),
        other => panic!("expected frame, got {:?}", other),
    }
    assert!(matches!(source.poll_frame(), FramePoll::Pending));
}

#[test]
fn dropping_the_sink_ends_the_stream() {
    let (sink, mut source) = channel();
    sink.send(frame(2, 2)).unwrap();
    drop(sink);

    // Buffered frames still drain before the end-of-stream signal.
    assert!(matches!(source.poll_frame(), FramePoll::Frame(_)));
    assert!(matches!(source.poll_frame(), FramePoll::End));
}

#[test]
fn send_fails_once_the_source_is_gone() {
    let (sink, source) = channel();
    drop(source);
    assert!(sink.send(frame(2, 2)).is_err());
}
