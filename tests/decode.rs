mod common;

use common::*;
use pretty_assertions::assert_eq;
use smfdump::prelude::*;

fn one_note_file() -> Vec<u8> {
    SmfBuilder::new()
        .header(0, 1, 96)
        .track(&track(&[
            event(0, &[0x90, 60, 64]),
            event(96, &[0x80, 60, 64]),
            event(0, &END_OF_TRACK),
        ]))
        .build()
}

#[test]
fn minimal_file() {
    let bytes = one_note_file();
    let events = decode(&bytes, DecodeOptions::new().quantize(true));

    assert_eq!(events.len(), 5);

    let DecodeEvent::ChunkDecoded(header) = events[0].event() else {
        panic!("expected the header chunk first");
    };
    assert_eq!(header.kind(), ChunkKind::Header);
    assert_eq!(
        header.header(),
        Some(&HeaderInfo::new(Format::SingleMultiChannel, 1, 96))
    );

    let notes = channel_events(&events);
    assert_eq!(notes.len(), 2);

    assert_eq!(notes[0].0, 0);
    assert_eq!(notes[0].1.channel(), Channel::One);
    assert_eq!(
        notes[0].1.message(),
        &VoiceMessage::NoteOn {
            note: Note::from_byte(60),
            velocity: 64
        }
    );

    assert_eq!(notes[1].0, 96);
    let VoiceMessage::NoteOff {
        note,
        elapsed_ticks,
        duration,
        ..
    } = notes[1].1.message()
    else {
        panic!("expected a note off");
    };
    assert_eq!(*note, Note::new(Key::C, Octave::new(5)));
    assert_eq!(*elapsed_ticks, 96);
    let duration = duration.as_ref().unwrap();
    assert_eq!(duration.to_string(), "1/4");
    assert_eq!(duration.display_with(*note).to_string(), "C5 1/4");

    assert_eq!(
        events[4].event(),
        &DecodeEvent::Meta {
            meta_type: MetaType::EndOfTrack,
            data: &[]
        }
    );
}

#[test]
fn without_quantizing_durations_are_absent() {
    let bytes = one_note_file();
    let events = decode(&bytes, DecodeOptions::new());
    let notes = channel_events(&events);
    assert!(matches!(
        notes[1].1.message(),
        VoiceMessage::NoteOff {
            elapsed_ticks: 96,
            duration: None,
            ..
        }
    ));
}

#[test]
fn very_short_notes_get_the_shortest_length() {
    let bytes = SmfBuilder::new()
        .header(0, 1, 96)
        .track(&track(&[
            event(0, &[0x90, 60, 64]),
            event(4, &[0x80, 60, 64]),
            event(0, &END_OF_TRACK),
        ]))
        .build();
    let events = decode(&bytes, DecodeOptions::new().quantize(true));
    let notes = channel_events(&events);

    let VoiceMessage::NoteOff {
        elapsed_ticks,
        duration,
        ..
    } = notes[1].1.message()
    else {
        panic!("expected a note off");
    };
    assert_eq!(*elapsed_ticks, 4);
    assert_eq!(duration.as_ref().unwrap().to_string(), "1/64");
}

#[test]
fn chunks_cover_the_whole_buffer() {
    let bytes = SmfBuilder::new()
        .header(1, 3, 480)
        .track(&track(&[event(0, &END_OF_TRACK)]))
        .track(&track(&[
            event(0, &[0xC0, 0]),
            event(10, &[0x90, 64, 100]),
            event(10, &[0x80, 64, 0]),
            event(0, &END_OF_TRACK),
        ]))
        .track(&track(&[event(0, &[0xF0, 0x02, 0x7E, 0xF7]), event(0, &END_OF_TRACK)]))
        .build();

    let events = decode(&bytes, DecodeOptions::new());
    let chunks: Vec<&ChunkInfo> = events
        .iter()
        .filter_map(|e| match e.event() {
            DecodeEvent::ChunkDecoded(c) => Some(c),
            _ => None,
        })
        .collect();

    let kinds: Vec<ChunkKind> = chunks.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![ChunkKind::Header, ChunkKind::Track, ChunkKind::Track, ChunkKind::Track]
    );

    let mut expected_offset = 0;
    for chunk in &chunks {
        assert_eq!(chunk.offset(), expected_offset);
        expected_offset += chunk.total_len();
    }
    assert_eq!(expected_offset, bytes.len());
}

#[test]
fn header_extra_bytes_are_ignored() {
    let bytes = SmfBuilder::new()
        .chunk(b"MThd", &[0, 0, 0, 1, 0, 96, 0xDE, 0xAD])
        .track(&track(&[event(0, &END_OF_TRACK)]))
        .build();
    let events = decode(&bytes, DecodeOptions::new());
    assert_eq!(events.len(), 3);
    assert_eq!(
        events.last().map(|e| e.event()),
        Some(&DecodeEvent::Meta {
            meta_type: MetaType::EndOfTrack,
            data: &[]
        })
    );
}

#[test]
fn tempo_changes_are_not_retroactive() {
    let bytes = SmfBuilder::new()
        .header(0, 1, 96)
        .track(&track(&[
            event(0, &[0x90, 60, 64]),
            event(48, &set_tempo(250_000)),
            event(48, &[0x80, 60, 64]),
            event(0, &END_OF_TRACK),
        ]))
        .build();

    let events = decode(&bytes, DecodeOptions::new());

    let tempo = events
        .iter()
        .find(|e| matches!(e.event(), DecodeEvent::TempoChanged(_)))
        .unwrap();
    assert_eq!(tempo.event(), &DecodeEvent::TempoChanged(Tempo::new(250_000)));
    assert_eq!(tempo.accumulated_ticks(), 48);
    // 48 ticks at 500 000 us per 96 ticks
    assert_eq!(tempo.micros(), UMicros::new(250_000));

    let notes = channel_events(&events);
    assert!(matches!(
        notes[1].1.message(),
        VoiceMessage::NoteOff {
            elapsed_ticks: 96,
            ..
        }
    ));

    let off = events
        .iter()
        .find(|e| {
            matches!(
                e.event(),
                DecodeEvent::Channel(c) if c.message().kind() == VoiceKind::NoteOff
            )
        })
        .unwrap();
    // the second 48 ticks run at the new tempo
    assert_eq!(off.micros(), UMicros::new(375_000));
}

#[test]
fn running_time_carries_across_tracks() {
    // The tick counter is file-wide: the second track starts where the first ended.
    let bytes = SmfBuilder::new()
        .header(1, 2, 96)
        .track(&track(&[
            event(0, &[0x90, 60, 64]),
            event(96, &[0x80, 60, 64]),
            event(0, &END_OF_TRACK),
        ]))
        .track(&track(&[
            event(0, &[0x91, 64, 64]),
            event(48, &[0x81, 64, 64]),
            event(0, &END_OF_TRACK),
        ]))
        .build();

    let events = decode(&bytes, DecodeOptions::new().quantize(true));
    let ticks: Vec<u64> = channel_events(&events).iter().map(|(t, _)| *t).collect();
    assert_eq!(ticks, vec![0, 96, 96, 144]);

    let second_off = channel_events(&events)[3].1.message().clone();
    let VoiceMessage::NoteOff {
        elapsed_ticks,
        duration,
        ..
    } = second_off
    else {
        panic!("expected a note off");
    };
    assert_eq!(elapsed_ticks, 48);
    assert_eq!(duration.unwrap().to_string(), "1/8");
}

#[test]
fn sysex_and_meta_events() {
    let bytes = SmfBuilder::new()
        .header(0, 1, 96)
        .track(&track(&[
            event(0, &[0xFF, 0x03, 0x05, b'P', b'i', b'a', b'n', b'o']),
            event(0, &[0xF0, 0x05, 0x7E, 0x7F, 0x09, 0x01, 0xF7]),
            event(0, &[0xFF, 0x58, 0x04, 4, 2, 24, 8]),
            event(0, &END_OF_TRACK),
        ]))
        .build();

    let events: Vec<DecodeEvent<'_>> = decode(&bytes, DecodeOptions::new())
        .into_iter()
        .skip(2)
        .map(Ticked::into_event)
        .collect();

    assert_eq!(
        events,
        vec![
            DecodeEvent::Meta {
                meta_type: MetaType::TrackName,
                data: b"Piano"
            },
            DecodeEvent::SysExSkipped { length: 5 },
            DecodeEvent::Meta {
                meta_type: MetaType::TimeSignature,
                data: &[4, 2, 24, 8]
            },
            DecodeEvent::Meta {
                meta_type: MetaType::EndOfTrack,
                data: &[]
            },
        ]
    );
}

#[test]
fn bytes_after_end_of_track_are_skipped() {
    let mut payload = track(&[event(0, &END_OF_TRACK)]);
    payload.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let bytes = SmfBuilder::new()
        .header(0, 2, 96)
        .track(&payload)
        .track(&track(&[event(0, &END_OF_TRACK)]))
        .build();

    let events = decode(&bytes, DecodeOptions::new());
    assert_eq!(events.len(), 5);
}

#[test]
fn rests_are_reported_between_notes() {
    let bytes = SmfBuilder::new()
        .header(0, 1, 96)
        .track(&track(&[
            event(0, &[0x90, 60, 64]),
            event(96, &[0x80, 60, 64]),
            event(192, &[0x90, 62, 64]),
            event(144, &[0x80, 62, 64]),
            event(0, &END_OF_TRACK),
        ]))
        .build();

    let events = decode(&bytes, DecodeOptions::new().quantize(true).report_rests(true));
    let rests: Vec<(u64, &Rest)> = events
        .iter()
        .filter_map(|e| match e.event() {
            DecodeEvent::Rest(r) => Some((e.accumulated_ticks(), r)),
            _ => None,
        })
        .collect();

    assert_eq!(rests.len(), 1);
    assert_eq!(rests[0].0, 288);
    assert_eq!(rests[0].1.elapsed_ticks, 192);
    assert_eq!(
        rests[0].1.duration.as_ref().map(|d| d.to_string()).as_deref(),
        Some("1/2")
    );

    let durations: Vec<String> = channel_events(&events)
        .iter()
        .filter_map(|(_, c)| match c.message() {
            VoiceMessage::NoteOff { duration, .. } => duration.as_ref().map(|d| d.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(durations, vec!["1/4".to_string(), "1/4 .".to_string()]);
}

#[test]
fn division_override() {
    let bytes = one_note_file();
    let events = decode(
        &bytes,
        DecodeOptions::new()
            .ticks_per_quarter_note(Some(48))
            .quantize(true),
    );
    let notes = channel_events(&events);
    let VoiceMessage::NoteOff { duration, .. } = notes[1].1.message() else {
        panic!("expected a note off");
    };
    // 96 ticks at 48 per quarter is a half note
    assert_eq!(duration.as_ref().unwrap().to_string(), "1/2");
}

#[test]
fn long_notes_tie() {
    let bytes = SmfBuilder::new()
        .header(0, 1, 96)
        .track(&track(&[
            event(0, &[0x90, 67, 80]),
            event(672, &[0x80, 67, 0]),
            event(0, &END_OF_TRACK),
        ]))
        .build();

    let events = decode(&bytes, DecodeOptions::new().quantize(true));
    let notes = channel_events(&events);
    let VoiceMessage::NoteOff { note, duration, .. } = notes[1].1.message() else {
        panic!("expected a note off");
    };
    // 672 ticks = 1.75 whole notes
    assert_eq!(
        duration.as_ref().unwrap().display_with(*note).to_string(),
        "G5 1/1 . ~ G5 1/4"
    );
}

#[test]
fn decoder_is_lazy() {
    let bytes = one_note_file();
    let mut decoder = Decoder::new(&bytes, DecodeOptions::new());

    decoder.next().unwrap().unwrap();
    assert_eq!(decoder.buffer_position(), 14);
    assert_eq!(decoder.session().timing().ticks_per_quarter_note(), 96);

    decoder.next().unwrap().unwrap();
    assert_eq!(decoder.buffer_position(), bytes.len());
    assert_eq!(decoder.session().ticks(), 0);

    assert_eq!(decoder.count(), 3);
}
