//! Built-in visitor table

use crate::model::action::Action;
use crate::model::visitor::{Effect, EffectTable, Visitor, VisitorCategory, VisitorId};

struct Entry {
    id: &'static str,
    category: VisitorCategory,
    name: &'static str,
    description: &'static str,
    emoji: &'static str,
    color: &'static str,
    accept: (i32, i32, i32, &'static str),
    reject: (i32, i32, i32, &'static str),
    challenge: (i32, i32, i32, &'static str),
    difficulty: u8,
    best_choice: Action,
    insight: &'static str,
}

impl Entry {
    fn build(self) -> Visitor {
        let effect = |(health, calm, score, message): (i32, i32, i32, &str)| {
            Effect::new(health, calm, score, message)
        };
        Visitor::new(
            VisitorId::new(self.id),
            self.category,
            self.name,
            EffectTable {
                accept: effect(self.accept),
                reject: effect(self.reject),
                challenge: effect(self.challenge),
                challenge_difficulty: self.difficulty,
            },
            self.best_choice,
        )
        .with_description(self.description)
        .with_emoji(self.emoji)
        .with_color(self.color)
        .with_insight(self.insight)
    }
}

pub(super) fn visitors() -> Vec<Visitor> {
    use Action::{Accept, Challenge, Reject};
    use VisitorCategory::{Complex, Negative, Positive};

    let entries = vec![
        // Positive
        Entry {
            id: "encouragement",
            category: Positive,
            name: "Encouragement",
            description: "A warm, supportive thought that lifts your spirits",
            emoji: "✨",
            color: "#FFD700",
            accept: (15, 20, 10, "Your castle glows with renewed strength!"),
            reject: (-5, -10, 0, "Pushing away support weakens your foundation."),
            challenge: (10, 15, 15, "You embrace the encouragement fully!"),
            difficulty: 2,
            best_choice: Accept,
            insight: "Accepting encouragement builds resilience and self-worth.",
        },
        Entry {
            id: "joy",
            category: Positive,
            name: "Joy",
            description: "Pure happiness seeking to brighten your day",
            emoji: "🌈",
            color: "#FF69B4",
            accept: (10, 25, 10, "Rainbow light fills your castle with warmth!"),
            reject: (0, -15, 0, "Rejecting joy dims your inner light."),
            challenge: (5, 20, 12, "You find joy in simple moments!"),
            difficulty: 1,
            best_choice: Accept,
            insight: "Joy is medicine for the soul - embrace it when it comes.",
        },
        Entry {
            id: "gratitude",
            category: Positive,
            name: "Gratitude",
            description: "Appreciation for the good things in life",
            emoji: "🙏",
            color: "#32CD32",
            accept: (12, 18, 8, "Gratitude strengthens your castle walls!"),
            reject: (-3, -8, 0, "Dismissing gratitude hardens your heart."),
            challenge: (8, 15, 12, "You cultivate deeper appreciation!"),
            difficulty: 2,
            best_choice: Accept,
            insight: "Gratitude transforms ordinary moments into blessings.",
        },
        // Negative
        Entry {
            id: "self-doubt",
            category: Negative,
            name: "Self-Doubt",
            description: "Dark whispers questioning your worth and abilities",
            emoji: "🌑",
            color: "#2F2F2F",
            accept: (-20, -25, 0, "Dark cracks spread across your castle walls."),
            reject: (5, 10, 5, "You stand firm against the darkness!"),
            challenge: (15, 20, 15, "You transform doubt into determination!"),
            difficulty: 3,
            best_choice: Reject,
            insight: "Self-doubt is often louder than it is true. Question the questioner.",
        },
        Entry {
            id: "anger",
            category: Negative,
            name: "Anger",
            description: "Burning rage that threatens to consume everything",
            emoji: "🔥",
            color: "#DC143C",
            accept: (-25, -30, 0, "Flames scorch your castle walls!"),
            reject: (0, 5, 3, "You cool the flames before they spread."),
            challenge: (10, 15, 20, "You channel anger into positive action!"),
            difficulty: 4,
            best_choice: Challenge,
            insight: "Anger is often pain wearing a mask. Look beneath the surface.",
        },
        Entry {
            id: "guilt",
            category: Negative,
            name: "Guilt",
            description: "Heavy burden of past mistakes weighing you down",
            emoji: "⚖️",
            color: "#696969",
            accept: (-15, -20, 0, "Heavy chains bind your castle."),
            reject: (3, 8, 5, "You release the burden from your shoulders."),
            challenge: (12, 18, 15, "You find forgiveness and learn from mistakes!"),
            difficulty: 3,
            best_choice: Challenge,
            insight: "Guilt should teach, not torture. Learn the lesson and let go.",
        },
        // Complex
        Entry {
            id: "criticism",
            category: Complex,
            name: "Criticism",
            description: "Sharp words that might hide valuable insights",
            emoji: "💎",
            color: "#4169E1",
            accept: (-10, -15, 0, "Harsh words cut into your walls."),
            reject: (-5, -5, 0, "You miss potential growth."),
            challenge: (10, 15, 25, "You transform criticism into wisdom!"),
            difficulty: 3,
            best_choice: Challenge,
            insight: "Not all criticism is attack. Some comes wrapped in care.",
        },
        Entry {
            id: "worry",
            category: Complex,
            name: "Worry",
            description: "Anxious thoughts about uncertain futures",
            emoji: "🌪️",
            color: "#9370DB",
            accept: (-12, -18, 0, "Worry clouds gather over your castle."),
            reject: (-8, -10, 0, "Ignoring worry doesn't make it disappear."),
            challenge: (8, 20, 20, "You find peace in uncertainty!"),
            difficulty: 4,
            best_choice: Challenge,
            insight: "Worry is interest paid on trouble before it comes due.",
        },
        Entry {
            id: "loneliness",
            category: Complex,
            name: "Loneliness",
            description: "The ache of disconnection from others",
            emoji: "🌙",
            color: "#483D8B",
            accept: (-8, -12, 0, "Shadows lengthen around your castle."),
            reject: (-10, -8, 0, "Isolation deepens your solitude."),
            challenge: (12, 18, 18, "You find connection within yourself!"),
            difficulty: 3,
            best_choice: Challenge,
            insight: "Loneliness is not about being alone, but feeling disconnected.",
        },
    ];

    entries.into_iter().map(Entry::build).collect()
}
