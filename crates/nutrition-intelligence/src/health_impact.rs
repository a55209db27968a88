// ABOUTME: Educational consequences of sustained nutrient deficiency
// ABOUTME: Symptoms, long-term risks, recovery timelines and narrative stories per nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use nutrition_core::models::Nutrient;
use serde::Serialize;

/// Narrative explanation of a deficiency for end users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStory {
    /// Headline
    pub title: &'static str,
    /// Real-world consequences
    pub scenario: &'static str,
    /// Before/after image for illustration
    pub visual_metaphor: &'static str,
    /// Physiological mechanism
    pub science_explanation: &'static str,
    /// Concrete steps to correct the deficit
    pub action_steps: &'static [&'static str],
    /// Outcome after correction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_story: Option<&'static str>,
}

/// Research-backed consequences of a sustained deficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthImpact {
    /// Symptoms within days or weeks
    pub immediate_symptoms: &'static [&'static str],
    /// Conditions risked over months or years
    pub long_term_risks: &'static [&'static str],
    /// How long correction usually takes
    pub recovery_timeline: &'static str,
    /// Narrative content
    pub story: HealthStory,
}

static VITAMIN_D: HealthImpact = HealthImpact {
    immediate_symptoms: &[
        "Persistent fatigue even after sleep",
        "Muscle weakness and aches",
        "Mood swings or feeling down",
        "Frequent colds and infections",
    ],
    long_term_risks: &[
        "Osteoporosis (brittle bones)",
        "Increased risk of fractures",
        "Weakened immune system",
        "Depression and cognitive decline",
        "Cardiovascular disease",
    ],
    recovery_timeline: "2-3 months with consistent supplementation",
    story: HealthStory {
        title: "The Sunshine Vitamin",
        scenario: "Imagine your bones as a building. Vitamin D is the construction manager that helps calcium enter and strengthen the structure. Without it, your building becomes fragile - like a house of cards. Sarah, 32, ignored her Vitamin D levels for years. Simple tasks like carrying groceries became painful. After just 8 weeks of correction, she ran her first 5K.",
        visual_metaphor: "Building crumbling -> Strong fortress transformation",
        science_explanation: "Vitamin D regulates calcium absorption in your intestines. Only 10-15% of dietary calcium is absorbed without adequate D. It also modulates 200+ genes affecting immune function, cell growth, and inflammation. Deficiency triggers parathyroid hormone elevation, pulling calcium from bones.",
        action_steps: &[
            "Get 15 minutes of midday sun (arms/legs exposed)",
            "Eat fatty fish 2-3 times weekly",
            "Include egg yolks daily",
            "Choose fortified foods",
            "Consider 1000-2000 IU supplement (doctor approved)",
        ],
        success_story: Some("After 12 weeks of consistent intake, bone density improved by 3% and energy levels doubled - verified by DEXA scan"),
    },
};

static OMEGA3: HealthImpact = HealthImpact {
    immediate_symptoms: &[
        "Dry, flaky skin",
        "Brain fog and poor concentration",
        "Joint pain and stiffness",
        "Mood instability",
    ],
    long_term_risks: &[
        "Heart disease and arrhythmias",
        "Cognitive decline and dementia",
        "Chronic inflammation",
        "Depression and anxiety disorders",
        "Macular degeneration (vision loss)",
    ],
    recovery_timeline: "4-6 weeks for symptom improvement, 3 months for optimal levels",
    story: HealthStory {
        title: "Brain Fuel Crisis",
        scenario: "Your brain is 60% fat, and Omega-3 (DHA) is its premium fuel. Without it, neuron membranes become rigid - like trying to run a race in concrete shoes. Mark, a software engineer, couldn't focus after lunch. Adding salmon twice weekly, his code reviews improved 40% in 6 weeks (tracked by commits).",
        visual_metaphor: "Rusty gears -> Smooth, oiled machine",
        science_explanation: "Omega-3 fatty acids (EPA & DHA) are structural components of cell membranes. They reduce inflammation by competing with Omega-6 for enzyme pathways, producing anti-inflammatory prostaglandins. Brain synaptic plasticity requires DHA for neurotransmitter receptor function.",
        action_steps: &[
            "Eat fatty fish (salmon, mackerel, sardines) 2-3x/week",
            "Snack on walnuts daily (7 halves = 2.5g ALA)",
            "Add ground flaxseeds to smoothies (1 tbsp)",
            "Use algae oil if vegan",
            "Aim for 1.6g daily (men), 1.1g (women)",
        ],
        success_story: Some("Cardiac patients with high Omega-3 intake showed 30% reduction in heart attack risk over 5 years (NEJM study)"),
    },
};

static IRON: HealthImpact = HealthImpact {
    immediate_symptoms: &[
        "Extreme fatigue and weakness",
        "Pale skin, brittle nails",
        "Shortness of breath",
        "Cold hands and feet",
        "Difficulty concentrating",
    ],
    long_term_risks: &[
        "Severe anemia",
        "Heart problems",
        "Pregnancy complications",
        "Impaired immune function",
        "Restless leg syndrome",
    ],
    recovery_timeline: "1-2 months to restore hemoglobin, 6 months for full iron stores",
    story: HealthStory {
        title: "The Oxygen Delivery Crisis",
        scenario: "Red blood cells are delivery trucks carrying oxygen. Iron is the key that locks oxygen in for transport. Without enough iron, your cells suffocate - like climbing Everest without an oxygen tank. Lisa, a marathon runner, couldn't finish her 5Ks. Iron supplementation brought her back to PRs in 8 weeks.",
        visual_metaphor: "Empty delivery trucks -> Fully loaded freight trains",
        science_explanation: "Iron is the core of hemoglobin, which binds oxygen in lungs and releases it in tissues. Each red blood cell contains 270 million hemoglobin molecules, each holding 4 iron atoms. Deficiency reduces oxygen delivery, forcing your heart to work harder. Women lose 1mg daily during menstruation.",
        action_steps: &[
            "Eat red meat 2-3x/week (heme iron, 25% absorbed)",
            "Combine plant iron with Vitamin C (spinach + lemon)",
            "Avoid coffee/tea with meals (blocks absorption)",
            "Cook in cast iron pans (adds 1-2mg per meal)",
            "Women need 18mg daily, men 8mg",
        ],
        success_story: Some("After 12 weeks of targeted iron intake, hemoglobin rose from 10.5 to 13.2 g/dL, eliminating fatigue"),
    },
};

static MAGNESIUM: HealthImpact = HealthImpact {
    immediate_symptoms: &[
        "Muscle cramps and spasms",
        "Insomnia and poor sleep quality",
        "Anxiety and irritability",
        "Fatigue",
        "Heart palpitations",
    ],
    long_term_risks: &[
        "Type 2 diabetes",
        "Osteoporosis",
        "Migraine headaches",
        "Cardiovascular disease",
        "Metabolic syndrome",
    ],
    recovery_timeline: "1-2 weeks for symptom relief, 1 month for optimal status",
    story: HealthStory {
        title: "The Relaxation Mineral",
        scenario: "Magnesium is like your body's chill pill - it relaxes 300+ enzymes, including those controlling your heartbeat and muscle contraction. Without it, you're stuck in fight-or-flight mode. Tom's leg cramps kept him up nightly. Within 10 days of magnesium-rich foods, he slept through the night.",
        visual_metaphor: "Tense, clenched fist -> Open, relaxed palm",
        science_explanation: "Magnesium regulates calcium channels in cells, controlling muscle contraction. It's a cofactor for ATP production (cellular energy) and activates over 300 enzymatic reactions. Deficiency causes neurons to fire excessively, leading to cramps, anxiety, and arrhythmias.",
        action_steps: &[
            "Snack on almonds or cashews (30 almonds = 80mg)",
            "Eat dark leafy greens daily",
            "Choose whole grains over refined",
            "Dark chocolate (70%+) provides 64mg per oz",
            "Epsom salt baths (absorbed through skin)",
        ],
        success_story: Some("Sleep quality improved by 35% after 2 weeks of magnesium optimization, measured by sleep tracker"),
    },
};

/// Deficiency consequences for a nutrient, if documented
#[must_use]
pub fn health_impact(nutrient: Nutrient) -> Option<&'static HealthImpact> {
    match nutrient {
        Nutrient::VitaminDMcg => Some(&VITAMIN_D),
        Nutrient::Omega3G => Some(&OMEGA3),
        Nutrient::IronMg => Some(&IRON),
        Nutrient::MagnesiumMg => Some(&MAGNESIUM),
        Nutrient::ProteinG
        | Nutrient::CarbsG
        | Nutrient::FatG
        | Nutrient::FiberG
        | Nutrient::VitaminCMg
        | Nutrient::VitaminAMcg
        | Nutrient::VitaminEMg
        | Nutrient::VitaminKMcg
        | Nutrient::ThiaminMg
        | Nutrient::RiboflavinMg
        | Nutrient::NiacinMg
        | Nutrient::VitaminB6Mg
        | Nutrient::FolateMcg
        | Nutrient::VitaminB12Mcg
        | Nutrient::CalciumMg
        | Nutrient::PhosphorusMg
        | Nutrient::PotassiumMg
        | Nutrient::SodiumMg
        | Nutrient::ZincMg
        | Nutrient::CopperMg
        | Nutrient::ManganeseMg
        | Nutrient::SeleniumMcg
        | Nutrient::Omega6G
        | Nutrient::WaterL => None,
    }
}
