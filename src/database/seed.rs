use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: [&'static str; 2],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Train with the school soccer team and play in league matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: ["lucas@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice drills and compete in inter-school basketball games",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: ["james@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore painting, drawing and sculpture in the art studio",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: ["isabella@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Rehearse and perform plays for the school community",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: ["charlotte@mergington.edu", "liam@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Build public speaking skills and argue at regional tournaments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: ["ethan@mergington.edu", "amelia@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Run hands-on experiments and prepare projects for the science fair",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: ["oliver@mergington.edu", "harper@mergington.edu"],
    },
];

/// The activities every fresh process starts with, in display order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|s| {
            (
                s.name.to_string(),
                Activity {
                    description: s.description.to_string(),
                    schedule: s.schedule.to_string(),
                    max_participants: s.max_participants,
                    participants: s.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
