//! Textual report rendering for interactions and containment analysis.
//!
//! The report is plain UTF-8 text, one logical item per line. Frames are
//! bracketed by start/end marker lines; a [`MAJOR_SEPARATOR`] divides the
//! top-level sections and a [`MINOR_SEPARATOR`] divides siblings within a
//! section. The output is a pure function of the input snapshot, so two runs
//! over the same snapshot are byte-identical.

use seqlens_core::{
    model::{CombinedFragment, Fragment, Interaction, Lifeline, Message},
    presentation::Presentation,
};

use crate::{SeqlensError, config::ContainmentPolicy, containment};

/// Separator line between top-level report sections.
pub const MAJOR_SEPARATOR: &str = "-----------------------";

/// Separator line between sibling items within a section.
pub const MINOR_SEPARATOR: &str = "----";

/// Renders the structural report for one interaction.
///
/// The report frames four sections in fixed order: the interaction frame
/// itself, gates, lifelines, and messages. Empty sections keep their start
/// and end markers with an empty body. This function always succeeds; a
/// valid (possibly empty) interaction has no failure modes.
pub fn describe_interaction(interaction: &Interaction) -> String {
    let mut out = String::new();

    push_line(&mut out, "start interaction");
    push_line(&mut out, MAJOR_SEPARATOR);
    write_gates(&mut out, interaction);
    push_line(&mut out, MAJOR_SEPARATOR);
    write_lifelines(&mut out, interaction);
    push_line(&mut out, MAJOR_SEPARATOR);
    write_messages(&mut out, interaction);
    push_line(&mut out, MAJOR_SEPARATOR);
    push_line(&mut out, "end.");

    out
}

/// Renders the containment section for one diagram's presentations.
///
/// Emits the section header, then one `includes message : <label>` line per
/// contained message in presentation store order. Without a combined-fragment
/// container the section body is empty.
///
/// # Errors
///
/// Propagates [`SeqlensError::AmbiguousContainer`] when the strict policy
/// finds more than one combined-fragment candidate.
pub fn describe_containment(
    presentations: &[Presentation],
    policy: ContainmentPolicy,
) -> Result<String, SeqlensError> {
    let labels = containment::find_contained_messages_with_policy(presentations, policy)?;

    let mut out = String::new();
    push_line(&mut out, MAJOR_SEPARATOR);
    push_line(&mut out, "start show include messages in combined fragment");
    push_line(&mut out, MINOR_SEPARATOR);
    for label in labels {
        push_line(&mut out, &format!("includes message : {label}"));
    }
    Ok(out)
}

fn write_gates(out: &mut String, interaction: &Interaction) {
    push_line(out, "Gate start.");
    for gate in interaction.gates() {
        push_line(out, gate.name());
    }
    push_line(out, "Gate end.");
}

fn write_lifelines(out: &mut String, interaction: &Interaction) {
    push_line(out, "Lifeline start.");
    for (index, lifeline) in interaction.lifelines().iter().enumerate() {
        if index > 0 {
            push_line(out, MINOR_SEPARATOR);
        }
        write_lifeline(out, lifeline);
    }
    push_line(out, "Lifeline end.");
}

fn write_lifeline(out: &mut String, lifeline: &Lifeline) {
    push_line(out, &format!("Lifeline : {}", lifeline.name()));
    if let Some(base) = lifeline.base() {
        push_line(out, &format!("Base : {base}"));
    }
    write_fragments(out, lifeline);
}

fn write_fragments(out: &mut String, lifeline: &Lifeline) {
    push_line(out, MINOR_SEPARATOR);
    push_line(out, "Fragment start.");
    for fragment in lifeline.fragments() {
        match fragment {
            Fragment::Combined(combined) => {
                push_line(out, MINOR_SEPARATOR);
                write_combined_fragment(out, combined);
                push_line(out, MINOR_SEPARATOR);
            }
            Fragment::StateInvariant { name } => {
                push_line(out, &format!("StateInvariant : {name}"));
            }
            Fragment::Other { name } => {
                push_line(out, name);
            }
        }
    }
    push_line(out, "Fragment end.");
    push_line(out, MINOR_SEPARATOR);
}

fn write_combined_fragment(out: &mut String, combined: &CombinedFragment) {
    push_line(out, "CombinedFragment");
    // All nine operator flags are reported, whatever their values; the
    // model does not guarantee mutual exclusivity.
    for (kind, value) in combined.operators().entries() {
        push_line(out, &format!("{kind} : {value}"));
    }
    for operand in combined.operands() {
        // Quoted so an empty guard is visible as '' rather than omitted
        push_line(
            out,
            &format!("interaction operand guard : '{}'", operand.guard()),
        );
    }
}

fn write_messages(out: &mut String, interaction: &Interaction) {
    push_line(out, "Message start.");
    for (index, message) in interaction.messages().iter().enumerate() {
        if index > 0 {
            push_line(out, MINOR_SEPARATOR);
        }
        write_message(out, message);
    }
    push_line(out, MINOR_SEPARATOR);
    push_line(out, "Message end.");
}

fn write_message(out: &mut String, message: &Message) {
    push_line(out, &format!("message : {}", message.name()));
    push_line(out, &format!("source : {}", message.source()));
    push_line(out, &format!("target : {}", message.target()));
    push_line(out, &format!("guard : {}", message.guard().unwrap_or_default()));
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use seqlens_core::{
        geometry::{Bounds, Point},
        model::{Gate, InteractionOperand, OperatorFlags},
        presentation::{LinkPresentation, NodePresentation},
    };

    use super::*;

    #[test]
    fn test_empty_interaction_keeps_all_frames() {
        let report = describe_interaction(&Interaction::default());
        assert_eq!(
            report,
            "start interaction\n\
             -----------------------\n\
             Gate start.\n\
             Gate end.\n\
             -----------------------\n\
             Lifeline start.\n\
             Lifeline end.\n\
             -----------------------\n\
             Message start.\n\
             ----\n\
             Message end.\n\
             -----------------------\n\
             end.\n"
        );
    }

    #[test]
    fn test_gates_section_emits_one_line_per_gate_in_order() {
        let interaction = Interaction::new(
            vec![Gate::new("in"), Gate::new("out"), Gate::new("timeout")],
            Vec::new(),
            Vec::new(),
        );
        let report = describe_interaction(&interaction);

        let gates_section: Vec<&str> = report
            .lines()
            .skip_while(|line| *line != "Gate start.")
            .take_while(|line| *line != "Gate end.")
            .skip(1)
            .collect();
        assert_eq!(gates_section, ["in", "out", "timeout"]);
    }

    #[test]
    fn test_base_line_present_iff_lifeline_has_base() {
        let interaction = Interaction::new(
            Vec::new(),
            vec![
                Lifeline::new("user", None, Vec::new()),
                Lifeline::new("server", Some("HttpServer".to_string()), Vec::new()),
            ],
            Vec::new(),
        );
        let report = describe_interaction(&interaction);

        assert!(report.contains("Lifeline : user\n----\n"));
        assert!(report.contains("Lifeline : server\nBase : HttpServer\n"));
        assert_eq!(report.matches("Base : ").count(), 1);
    }

    #[test]
    fn test_sibling_lifelines_are_separated() {
        let interaction = Interaction::new(
            Vec::new(),
            vec![
                Lifeline::new("a", None, Vec::new()),
                Lifeline::new("b", None, Vec::new()),
            ],
            Vec::new(),
        );
        let report = describe_interaction(&interaction);

        // Each lifeline renders its fragments frame; the sibling separator
        // sits between the first frame's trailing separator and the second
        // lifeline's header.
        assert!(report.contains(
            "Fragment start.\n\
             Fragment end.\n\
             ----\n\
             ----\n\
             Lifeline : b\n"
        ));
    }

    #[test]
    fn test_combined_fragment_emits_nine_flags_and_quoted_guards() {
        let combined = CombinedFragment::new(
            OperatorFlags {
                alt: true,
                ..OperatorFlags::default()
            },
            vec![
                InteractionOperand::new("x > 0"),
                InteractionOperand::new(""),
            ],
        );
        let interaction = Interaction::new(
            Vec::new(),
            vec![Lifeline::new(
                "a",
                None,
                vec![Fragment::Combined(combined)],
            )],
            Vec::new(),
        );
        let report = describe_interaction(&interaction);

        assert!(report.contains(
            "----\n\
             CombinedFragment\n\
             alt : true\n\
             assert : false\n\
             break : false\n\
             consider : false\n\
             critical : false\n\
             ignore : false\n\
             loop : false\n\
             neg : false\n\
             opt : false\n\
             interaction operand guard : 'x > 0'\n\
             interaction operand guard : ''\n\
             ----\n"
        ));
    }

    #[test]
    fn test_state_invariant_and_other_fragments() {
        let interaction = Interaction::new(
            Vec::new(),
            vec![Lifeline::new(
                "a",
                None,
                vec![
                    Fragment::StateInvariant {
                        name: "idle".to_string(),
                    },
                    Fragment::Other {
                        name: "occurrence".to_string(),
                    },
                ],
            )],
            Vec::new(),
        );
        let report = describe_interaction(&interaction);

        assert!(report.contains(
            "Fragment start.\n\
             StateInvariant : idle\n\
             occurrence\n\
             Fragment end.\n"
        ));
    }

    #[test]
    fn test_single_message_section() {
        let interaction = Interaction::new(
            Vec::new(),
            Vec::new(),
            vec![Message::new("m1", "A", "B", Some("x>0".to_string()))],
        );
        let report = describe_interaction(&interaction);

        // No separator before the first message, one trailing separator
        assert!(report.contains(
            "Message start.\n\
             message : m1\n\
             source : A\n\
             target : B\n\
             guard : x>0\n\
             ----\n\
             Message end.\n"
        ));
    }

    #[test]
    fn test_sibling_messages_are_separated() {
        let interaction = Interaction::new(
            Vec::new(),
            Vec::new(),
            vec![
                Message::new("m1", "a", "b", None),
                Message::new("m2", "b", "a", None),
            ],
        );
        let report = describe_interaction(&interaction);

        assert!(report.contains(
            "message : m1\n\
             source : a\n\
             target : b\n\
             guard : \n\
             ----\n\
             message : m2\n"
        ));
    }

    #[test]
    fn test_report_is_deterministic() {
        let interaction = Interaction::new(
            vec![Gate::new("g")],
            vec![Lifeline::new(
                "a",
                Some("A".to_string()),
                vec![Fragment::Combined(CombinedFragment::default())],
            )],
            vec![Message::new("m1", "a", "g", None)],
        );

        assert_eq!(
            describe_interaction(&interaction),
            describe_interaction(&interaction)
        );
    }

    #[test]
    fn test_containment_section_lists_contained_labels() {
        let presentations = vec![
            Presentation::Node(NodePresentation::new(
                "CombinedFragment",
                Bounds::new(0.0, 0.0, 100.0, 100.0),
            )),
            Presentation::Link(LinkPresentation::new(
                "Message",
                "m1",
                vec![Point::new(10.0, 10.0), Point::new(90.0, 90.0)],
            )),
            Presentation::Link(LinkPresentation::new(
                "Message",
                "m2",
                vec![Point::new(10.0, 10.0), Point::new(150.0, 90.0)],
            )),
        ];

        let section =
            describe_containment(&presentations, ContainmentPolicy::LastWins).unwrap();
        assert_eq!(
            section,
            "-----------------------\n\
             start show include messages in combined fragment\n\
             ----\n\
             includes message : m1\n"
        );
    }

    #[test]
    fn test_containment_section_without_container_is_header_only() {
        let section = describe_containment(&[], ContainmentPolicy::LastWins).unwrap();
        assert_eq!(
            section,
            "-----------------------\n\
             start show include messages in combined fragment\n\
             ----\n"
        );
    }
}
