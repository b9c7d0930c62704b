mod common;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use common::{ints, raw, Human, Int, Pet};
use vecstream::logging::{CollectionEvent, OperatorEvent, StreamSetup, TerminalEvent};
use vecstream::logging_core::{BufferingLogger, LoggerBatch};
use vecstream::{stream_flat_map, stream_map, CollectionError, Stream, Vector};

fn sample() -> Stream<Int> {
    Stream::of([1, 2, 2, 3, 4, 3, 100].map(Int))
}

#[test]
fn stream_of() {
    assert_eq!(raw(sample().as_slice()), vec![1, 2, 2, 3, 4, 3, 100]);
}

#[test]
fn distinct() {
    let distinct = sample().distinct();
    assert_eq!(distinct.len(), 5);
    let seen: HashSet<Int> = distinct.as_slice().iter().copied().collect();
    let expected: HashSet<Int> = [1, 2, 3, 4, 100].map(Int).into_iter().collect();
    assert_eq!(seen, expected);

    let sorted = distinct.sort(|a, b| a < b);
    assert_eq!(raw(sorted.as_slice()), vec![1, 2, 3, 4, 100]);
}

#[test]
fn filter() {
    let stream = sample();
    let later = stream.filter(|_, index| index > 2);
    assert_eq!(raw(later.as_slice()), vec![3, 4, 3, 100]);
    assert_eq!(stream.len(), 7);

    let sorted = later.sort(|a, b| a < b);
    assert_eq!(raw(sorted.as_slice()), vec![3, 3, 4, 100]);
}

#[test]
fn reduce() {
    let stream = Stream::of([1, 2, 3].map(Int));
    assert_eq!(stream.reduce(|a, b| Int(a.0 + b.0)), Ok(Int(6)));
    assert_eq!(Stream::of([Int(9)]).reduce(|_, _| Int(0)), Ok(Int(9)));
    assert_eq!(
        Stream::<Int>::of([]).reduce(|a, _| a),
        Err(CollectionError::EmptySequence { operation: "reduce" }),
    );
}

#[test]
fn max_and_min() {
    let stream = Stream::of([1, 2000, 2, 3].map(Int));
    assert_eq!(stream.max(|a, b| a.cmp(b)), Ok(Int(2000)));
    assert_eq!(stream.min(|a, b| a.cmp(b)), Ok(Int(1)));

    let empty: Stream<Int> = Stream::of([]);
    assert!(empty.max(|a, b| a.cmp(b)).is_err());
    assert_eq!(empty.min(|a, b| a.cmp(b)), Err(CollectionError::EmptySequence { operation: "min" }));
}

#[test]
fn max_keeps_first_of_ties() {
    let stream = Stream::of(["bb", "a", "cc", "d"]);
    assert_eq!(stream.max(|a, b| a.len().cmp(&b.len())), Ok("bb"));
    assert_eq!(stream.min(|a, b| a.len().cmp(&b.len())), Ok("a"));
}

#[test]
fn none_match() {
    let stream = Stream::of([1, 2, 3, 4].map(Int));
    assert!(!stream.none_match(|v| v.0 > -1));

    let negated = Stream::of([1, 2, 3, 4].map(Int)).map(|v, _| Int(-v.0));
    assert!(negated.none_match(|v| v.0 > -1));
    assert!(Stream::<Int>::of([]).none_match(|_| true));
}

#[test]
fn all_and_any_match() {
    let stream = sample();
    assert!(stream.all_match(|v, _| v.0 > 0));
    assert!(!stream.all_match(|v, index| v.0 > index as i64));
    assert!(stream.any_match(|v, index| index == 6 && v.0 == 100));
    assert!(!stream.any_match(|v, _| v.0 > 100));

    let empty: Stream<Int> = Stream::of([]);
    assert!(empty.all_match(|_, _| false));
    assert!(!empty.any_match(|_, _| true));
}

#[test]
fn find_any_and_find_first() {
    let stream = sample();
    assert_eq!(stream.as_slice()[0], stream.find_any());
    assert_eq!(stream.as_slice()[0], stream.find_first());

    let empty: Stream<Int> = Stream::of([]);
    assert_eq!(empty.find_first(), Int::default());
    assert_eq!(empty.find_any(), Int::default());
}

#[test]
fn skip_and_limit() {
    let stream = sample();
    let middle = stream.skip(1).unwrap().limit(2).unwrap();
    assert_eq!(middle.as_slice(), &stream.as_slice()[1..3]);

    assert_eq!(stream.skip(7).unwrap().len(), 0);
    assert_eq!(stream.limit(7).unwrap().len(), 7);
    assert_eq!(stream.skip(8).unwrap_err(), CollectionError::CountOutOfRange { count: 8, len: 7 });
    assert!(stream.limit(8).is_err());
}

#[test]
fn map_in_place() {
    let mapped = sample().map(|v, index| Int(v.0 + index as i64));
    assert_eq!(raw(mapped.as_slice()), vec![1, 3, 4, 6, 8, 8, 106]);
}

#[test]
fn for_each_in_order() {
    let mut seen = Vec::new();
    sample().for_each(|v, index| seen.push((index, v.0)));
    assert_eq!(seen, vec![(0, 1), (1, 2), (2, 2), (3, 3), (4, 4), (5, 3), (6, 100)]);
}

#[test]
fn stream_map_changes_type() {
    let stream = sample();
    let labels = stream_map(&stream, |v, index| format!("{}:{}", index, v));
    assert_eq!(labels.as_slice()[6], "6:100");
    assert_eq!(labels.len(), stream.len());
}

#[test]
fn stream_flat_map_concatenates() {
    let mut humans = Vector::new();
    for i in 0..10 {
        let mut pets = Vector::new();
        for j in 0..i {
            pets.push(Pet { kind: format!("Type {} {}", i, j) });
        }
        humans.push(Human { name: format!("Name #{}", i), pets });
    }

    let pets = stream_flat_map(&humans.stream(), |human, _| human.pets.stream());
    assert_eq!(pets.len(), 45);
    assert_eq!(pets.find_first().kind, "Type 1 0");
    assert_eq!(pets.as_slice()[1].kind, "Type 2 0");
    assert_eq!(pets.as_slice()[2].kind, "Type 2 1");
    assert_eq!(pets.as_slice()[44].kind, "Type 9 8");
}

#[test]
fn round_trip_length() {
    let vector = ints(&[5, 6, 7]);
    assert_eq!(vector.stream().len(), vector.len());
    assert_eq!(vector.stream().map(|v, _| *v).sort(|a, b| a < b).len(), vector.len());
    assert_eq!(vector.stream().into_vector(), vector);
}

#[test]
fn logger_records_operators() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let action: Box<dyn FnMut(LoggerBatch<StreamSetup, CollectionEvent>)> = Box::new(move |batch| {
        if let LoggerBatch::Logs(records) = batch {
            sink.borrow_mut().extend(records.iter().map(|(_, setup, event)| (setup.pipeline, event.clone())));
        }
    });
    let logger = Rc::new(BufferingLogger::new(StreamSetup { pipeline: 4 }, action));

    let stream = sample().with_logger(Rc::clone(&logger));
    let total = stream
        .filter(|v, _| v.0 % 2 == 0)
        .skip(1)
        .unwrap()
        .reduce(|a, b| Int(a.0 + b.0));
    assert_eq!(total, Ok(Int(106)));
    assert!(stream.distinct().logger().is_some());

    drop(stream);
    logger.flush();

    let expected: Vec<(usize, CollectionEvent)> = vec![
        (4, OperatorEvent::new("filter", 7, 4).into()),
        (4, OperatorEvent::new("skip", 4, 3).into()),
        (4, TerminalEvent { name: "reduce", input: 3 }.into()),
        (4, OperatorEvent::new("distinct", 7, 5).into()),
    ];
    assert_eq!(*events.borrow(), expected);
}

#[test]
fn unlogged_by_default() {
    assert!(sample().logger().is_none());
    assert!(sample().filter(|_, _| true).logger().is_none());
}
