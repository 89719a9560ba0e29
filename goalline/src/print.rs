use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::distribution::ScoreDistribution;
use crate::domain::{Outcome, OutcomeProbs};

pub fn tabulate_outcomes(probs: &OutcomeProbs) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Probability".into(), "Fair price".into()],
        ));
    for outcome in Outcome::iter() {
        let prob = probs[outcome];
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.to_string().into(),
                format!("{prob:.6}").into(),
                format!("{:.3}", 1.0 / prob).into(),
            ],
        ));
    }
    table
}

/// Lays out the two distributions side by side, one row per score bucket. The last row is the
/// capped tail.
pub fn tabulate_distributions(home: &ScoreDistribution, away: &ScoreDistribution) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Centred)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(10))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Goals".into(),
                format!("Side 1 ({})", home.rate()).into(),
                format!("Side 2 ({})", away.rate()).into(),
            ],
        ));
    let buckets = usize::max(home.probs().len(), away.probs().len());
    for goals in 0..buckets {
        let label = if goals + 1 == buckets {
            format!("{goals}+")
        } else {
            goals.to_string()
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                label.into(),
                format_bucket(home.probs().get(goals)).into(),
                format_bucket(away.probs().get(goals)).into(),
            ],
        ));
    }
    table
}

fn format_bucket(prob: Option<&f64>) -> String {
    prob.map(|prob| format!("{prob:.6}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use stanza::renderer::markdown::Markdown;
    use stanza::renderer::Renderer;

    use crate::domain::{GoalCap, Side};
    use crate::factorial::Calculator;

    use super::*;

    #[test]
    fn outcomes_table() {
        let table = tabulate_outcomes(&OutcomeProbs::new(0.5, 0.25, 0.25));
        let rendered = Markdown::default().render(&table).to_string();
        assert!(rendered.contains("Win 1"), "{rendered}");
        assert!(rendered.contains("0.500000"), "{rendered}");
        assert!(rendered.contains("4.000"), "{rendered}");
    }

    #[test]
    fn distributions_table() {
        let cap = GoalCap::new(2).unwrap();
        let home = ScoreDistribution::build(Side::Home, 1.0, cap, &Calculator).unwrap();
        let away = ScoreDistribution::build(Side::Away, 0.0, cap, &Calculator).unwrap();
        let rendered = Markdown::default().render(&tabulate_distributions(&home, &away)).to_string();
        assert!(rendered.contains("2+"), "{rendered}");
        assert!(rendered.contains("1.000000"), "{rendered}");
    }
}
