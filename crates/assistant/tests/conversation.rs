use lazykitchen_assistant::{Intent, Sender, Transcript, respond};
use lazykitchen_catalog::fixtures;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn converse(lines: &[&str], seed: u64) -> Transcript {
    let recipes = fixtures::recipes();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut transcript = Transcript::new();

    for line in lines {
        if transcript.push_user(line).is_some() {
            let reply = respond(line, &recipes, &mut rng);
            transcript.push_reply(&reply);
        }
    }

    transcript
}

#[test]
fn history_does_not_change_replies() {
    let recipes = fixtures::recipes();

    let fresh = respond("謝謝", &recipes, &mut StdRng::seed_from_u64(1));
    let after_chat = converse(&["你好", "推薦一道菜", "謝謝"], 1);

    let last = after_chat.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, fresh.text);
}

#[test]
fn recommendation_links_to_a_catalog_recipe() {
    let transcript = converse(&["今天有什麼好吃的"], 9);
    let recipes = fixtures::recipes();

    let link = transcript
        .messages()
        .iter()
        .find_map(|m| m.recipe_id.clone())
        .expect("view-recipe line");
    assert!(recipes.iter().any(|r| r.id == link));
}

#[test]
fn blank_lines_get_no_reply() {
    let transcript = converse(&["", "  "], 0);
    assert_eq!(transcript.len(), 1);
}

#[test]
fn reply_serializes_intent_in_snake_case() {
    let reply = respond("怎麼做", &[], &mut StdRng::seed_from_u64(0));
    assert_eq!(reply.intent, Intent::HowTo);

    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["intent"], "how_to");
    assert!(json.get("recipe_id").is_none());
}
