use crate::types::{Deliverable, Plan, Workstream};

/// Built-in plan served whenever extraction fails, so a user who asked
/// for a plan always receives one.
pub fn default_plan() -> Plan {
    Plan {
        workstreams: vec![
            Workstream {
                id: "A".to_string(),
                title: "Enablement Strategy & Foundation".to_string(),
                description: "Define purpose, scope, and initial structure with leadership alignment."
                    .to_string(),
                deliverables: vec![
                    Deliverable {
                        id: "A1".to_string(),
                        title: "Enablement Charter".to_string(),
                        description:
                            "Mission, vision, scope, and objectives for the enablement function."
                                .to_string(),
                    },
                    Deliverable {
                        id: "A2".to_string(),
                        title: "Success Metrics & Measurement Plan".to_string(),
                        description:
                            "KPIs to track effectiveness and onboarding outcomes; measurement approach."
                                .to_string(),
                    },
                    Deliverable {
                        id: "A3".to_string(),
                        title: "Leadership Alignment & Sponsorship".to_string(),
                        description:
                            "Stakeholder commitments and resourcing for the enablement initiative."
                                .to_string(),
                    },
                ],
            },
            Workstream {
                id: "B".to_string(),
                title: "Current State Analysis & Needs Assessment".to_string(),
                description: "Identify gaps in skills, content, and processes across teams."
                    .to_string(),
                deliverables: vec![
                    Deliverable {
                        id: "B1".to_string(),
                        title: "Stakeholder Interviews".to_string(),
                        description: "Structured interviews to capture pain points.".to_string(),
                    },
                    Deliverable {
                        id: "B2".to_string(),
                        title: "Skills/Process Gap Report".to_string(),
                        description: "Summary of gaps and prioritized needs.".to_string(),
                    },
                ],
            },
            Workstream {
                id: "C".to_string(),
                title: "Enablement Function & Program Development".to_string(),
                description: "Design programs, content, and cadences to address prioritized needs."
                    .to_string(),
                deliverables: vec![
                    Deliverable {
                        id: "C1".to_string(),
                        title: "Curriculum & Content Plan".to_string(),
                        description: "Sequenced modules with owners and formats.".to_string(),
                    },
                    Deliverable {
                        id: "C2".to_string(),
                        title: "Pilot & Feedback Loop".to_string(),
                        description: "Run pilot, gather feedback, iterate content.".to_string(),
                    },
                ],
            },
            Workstream {
                id: "D".to_string(),
                title: "Impact Measurement & Continuous Improvement".to_string(),
                description: "Track outcomes, refine programs, and report to leadership."
                    .to_string(),
                deliverables: vec![
                    Deliverable {
                        id: "D1".to_string(),
                        title: "Reporting Dashboard".to_string(),
                        description: "KPIs with targets and trends for stakeholders.".to_string(),
                    },
                    Deliverable {
                        id: "D2".to_string(),
                        title: "Quarterly Review".to_string(),
                        description: "Review outcomes, adjust roadmap, and refresh content."
                            .to_string(),
                    },
                ],
            },
        ],
    }
}
