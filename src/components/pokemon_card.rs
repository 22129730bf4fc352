use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use super::theme::{self, ACCENT_GOLD, BG_PANEL, TEXT_DIM, TEXT_MAIN, stat_color, type_color};
use crate::action::Action;
use crate::pokemon::{Pokemon, Stats};

pub struct PokemonCardProps<'a> {
    pub pokemon: Option<&'a Pokemon>,
    pub is_favorite: bool,
}

/// Detail panel for one catalog entry
#[derive(Default)]
pub struct PokemonCard;

impl Component<Action> for PokemonCard {
    type Props<'a> = PokemonCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Details ", theme::title_style()))
            .border_style(theme::border_style(false))
            .style(Style::default().bg(BG_PANEL));

        let Some(pokemon) = props.pokemon else {
            let text = Paragraph::new(Line::from(Span::styled(
                "Select a Pokémon",
                Style::default().fg(TEXT_DIM),
            )))
            .block(block);
            frame.render_widget(text, area);
            return;
        };

        let lines = card_lines(pokemon, props.is_favorite);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn card_lines(pokemon: &Pokemon, is_favorite: bool) -> Vec<Line<'static>> {
    let mut title = vec![
        Span::styled(
            pokemon.display_name().to_string(),
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", pokemon.number_label()),
            Style::default().fg(TEXT_DIM),
        ),
    ];
    if is_favorite {
        title.push(Span::styled("  ★", Style::default().fg(ACCENT_GOLD)));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            pokemon.category.clone(),
            Style::default().fg(TEXT_DIM),
        )),
    ];

    let mut badges = Vec::new();
    for name in pokemon.type_names() {
        badges.push(Span::styled(
            format!(" {name} "),
            Style::default()
                .fg(Color::White)
                .bg(type_color(name))
                .add_modifier(Modifier::BOLD),
        ));
        badges.push(Span::raw(" "));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }

    lines.push(Line::from(vec![
        Span::styled("Height ", Style::default().fg(TEXT_DIM)),
        Span::raw(pokemon.height.clone().unwrap_or_else(|| "?".into())),
        Span::styled("   Weight ", Style::default().fg(TEXT_DIM)),
        Span::raw(pokemon.weight.clone().unwrap_or_else(|| "?".into())),
        Span::styled("   Gen ", Style::default().fg(TEXT_DIM)),
        Span::raw(pokemon.generation.to_string()),
    ]));

    if let Some(stats) = &pokemon.stats {
        lines.push(Line::default());
        lines.extend(stat_lines(stats));
    }

    let talents = pokemon.talents();
    if !talents.is_empty() {
        lines.push(Line::default());
        let mut spans = vec![Span::styled("Talents: ", Style::default().fg(TEXT_DIM))];
        for (index, talent) in talents.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(", "));
            }
            spans.push(Span::raw(talent.name.clone()));
            if talent.tc {
                spans.push(Span::styled(
                    " (hidden)",
                    Style::default().fg(ACCENT_GOLD),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    if let Some(evolution) = &pokemon.evolution {
        let pre = evolution.pre.as_deref().unwrap_or_default();
        let next = evolution.next.as_deref().unwrap_or_default();
        if !pre.is_empty() {
            lines.push(evolution_line("From: ", pre.iter().map(|s| s.label())));
        }
        if !next.is_empty() {
            lines.push(evolution_line("Evolves: ", next.iter().map(|s| s.label())));
        }
    }

    lines
}

fn stat_lines(stats: &Stats) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = stats
        .entries()
        .iter()
        .map(|(label, value)| {
            let bar_len = (value / 10).clamp(1, 20) as usize;
            Line::from(vec![
                Span::styled(format!("{label:>7} {value:>3} "), Style::default().fg(TEXT_DIM)),
                Span::styled("#".repeat(bar_len), Style::default().fg(stat_color(*value))),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(format!("{:>7} ", "Total"), Style::default().fg(TEXT_DIM)),
        Span::styled(
            stats.total().to_string(),
            Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn evolution_line(label: &'static str, steps: impl Iterator<Item = String>) -> Line<'static> {
    let chain = steps.collect::<Vec<_>>().join(" → ");
    Line::from(vec![
        Span::styled(label, Style::default().fg(TEXT_DIM)),
        Span::raw(chain),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Evolution, EvolutionStep, Names, PokemonType, Talent};
    use tui_dispatch::testing::*;

    fn salameche() -> Pokemon {
        Pokemon {
            pokedex_id: 4,
            generation: 1,
            category: "Pokémon Lézard".into(),
            name: Names {
                fr: "Salamèche".into(),
                ..Default::default()
            },
            types: Some(vec![PokemonType {
                name: "Feu".into(),
                image: String::new(),
            }]),
            talents: Some(vec![
                Talent {
                    name: "Brasier".into(),
                    tc: false,
                },
                Talent {
                    name: "Force Soleil".into(),
                    tc: true,
                },
            ]),
            stats: Some(Stats {
                hp: 39,
                atk: 52,
                def: 43,
                spe_atk: 60,
                spe_def: 50,
                vit: 65,
            }),
            evolution: Some(Evolution {
                pre: None,
                next: Some(vec![EvolutionStep {
                    pokedex_id: Some(5),
                    name: Some("Reptincel".into()),
                    condition: Some("Niveau 16".into()),
                }]),
                mega: None,
            }),
            height: Some("0,6 m".into()),
            weight: Some("8,5 kg".into()),
            ..Default::default()
        }
    }

    fn render_card(pokemon: Option<&Pokemon>, is_favorite: bool) -> String {
        let mut render = RenderHarness::new(60, 24);
        let mut component = PokemonCard;
        render.render_to_string_plain(|frame| {
            let props = PokemonCardProps {
                pokemon,
                is_favorite,
            };
            component.render(frame, frame.area(), props);
        })
    }

    #[test]
    fn test_render_details() {
        let pokemon = salameche();
        let output = render_card(Some(&pokemon), true);

        assert!(output.contains("Salamèche"));
        assert!(output.contains("#004"));
        assert!(output.contains("Pokémon Lézard"));
        assert!(output.contains("Feu"));
        assert!(output.contains("Total 309"));
        assert!(output.contains("Force Soleil (hidden)"));
        assert!(output.contains("Reptincel (Niveau 16)"));
        assert!(output.contains("★"));
    }

    #[test]
    fn test_stat_bar_is_clamped() {
        let stats = Stats {
            hp: 5,
            atk: 255,
            ..Default::default()
        };
        let lines = stat_lines(&stats);
        let bars: Vec<usize> = lines[..2]
            .iter()
            .map(|line| line.spans[1].content.len())
            .collect();
        assert_eq!(bars, vec![1, 20]);
    }

    #[test]
    fn test_render_without_selection() {
        let output = render_card(None, false);
        assert!(output.contains("Select a Pokémon"));
    }
}
