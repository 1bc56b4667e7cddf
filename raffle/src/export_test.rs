use super::*;

use crate::consts::DRAW_CAPACITY;
use crate::engine::DrawEngine;
use crate::roster::placeholder_roster;
use crate::sampler::RoundRobin;

fn drawn_list(count: usize) -> Vec<Participant> {
    placeholder_roster(count)
}

#[test]
fn title_carries_the_event_name() {
    let doc = ResultsDocument::new("Year-End Raffle", &[]);
    assert_eq!(doc.title(), "Drawn Participants - Year-End Raffle");
}

#[test]
fn rows_match_draw_order() {
    let drawn = drawn_list(3);
    let doc = ResultsDocument::new("Year-End Raffle", &drawn);
    assert_eq!(doc.rows().len(), 3);
    assert_eq!(doc.rows()[0], ["Participant 1", "REG00001"]);
    assert_eq!(doc.rows()[2], ["Participant 3", "REG00003"]);
}

#[test]
fn empty_drawn_list_yields_title_and_header_only() {
    let doc = ResultsDocument::new("Year-End Raffle", &[]);
    let csv = doc.to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Drawn Participants - Year-End Raffle");
    assert_eq!(lines[1], "Name,Registration");
}

#[test]
fn full_session_has_header_plus_capacity_rows() {
    let drawn = drawn_list(DRAW_CAPACITY);
    let doc = ResultsDocument::new("Year-End Raffle", &drawn);
    let csv = doc.to_csv();
    // Title line, then 33 table rows: 1 header + 32 data.
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len() - 1, 33);
    assert_eq!(lines[1], "Name,Registration");
    assert_eq!(lines[2], "Participant 1,REG00001");
    assert_eq!(lines[33], "Participant 32,REG00032");
}

#[test]
fn csv_rows_follow_engine_draw_order_exactly() {
    let mut engine = DrawEngine::new(placeholder_roster(50));
    let mut sampler = RoundRobin::new();
    while engine.request_draw() {
        engine.complete_draw(&mut sampler);
    }

    let doc = ResultsDocument::new("Year-End Raffle", engine.drawn());
    let csv = doc.to_csv();
    let lines: Vec<&str> = csv.lines().collect();

    for (i, p) in engine.drawn().iter().enumerate() {
        assert_eq!(lines[i + 2], format!("{},{}", p.name, p.registration));
    }
}

#[test]
fn fields_with_commas_are_quoted() {
    let drawn = vec![Participant {
        name: "Lovelace, Ada".to_owned(),
        registration: "REG00001".to_owned(),
    }];
    let doc = ResultsDocument::new("Year-End Raffle", &drawn);
    let csv = doc.to_csv();
    assert!(csv.contains("\"Lovelace, Ada\",REG00001"));
}

#[test]
fn embedded_quotes_are_doubled() {
    let drawn = vec![Participant {
        name: "Ada \"the Countess\"".to_owned(),
        registration: "REG00001".to_owned(),
    }];
    let doc = ResultsDocument::new("Year-End Raffle", &drawn);
    assert!(doc.to_csv().contains("\"Ada \"\"the Countess\"\"\","));
}

#[test]
fn title_with_comma_is_quoted() {
    let doc = ResultsDocument::new("Raffle, Winter Edition", &[]);
    let csv = doc.to_csv();
    let first_line = csv.lines().next().expect("title line");
    assert_eq!(first_line, "\"Drawn Participants - Raffle, Winter Edition\"");
}

#[test]
fn document_is_a_pure_read_of_the_drawn_list() {
    let drawn = drawn_list(4);
    let before = drawn.clone();
    let _doc = ResultsDocument::new("Year-End Raffle", &drawn);
    assert_eq!(drawn, before);
}
