//! Built-in catalog data served by the application.
//!
//! Everything here is loaded once at start-up. The only values that change at
//! runtime are the `is_favorite` flags, and those changes live in the session.

use crate::types::{
    Comment, CommunityStats, CookingTip, Difficulty, Ingredient, Recipe, RecipeIngredient,
    RecipeStep,
};

const UNSPLASH: &str = "https://images.unsplash.com";
const TEAM: &str = "懶人食代團隊";

fn photo(id: &str, width: u16) -> String {
    format!("{UNSPLASH}/photo-{id}?ixlib=rb-1.2.1&auto=format&fit=crop&w={width}&q=80")
}

fn ingredient(id: &str, name: &str, category: &str, image: &str) -> Ingredient {
    Ingredient::new(id, name)
        .with_category(category)
        .with_image(photo(image, 100))
}

fn uses(ingredient: &Ingredient, amount: f32, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        ingredient: ingredient.clone(),
        amount,
        unit: unit.to_owned(),
    }
}

fn extra(id: &str, name: &str, category: &str, amount: f32, unit: &str) -> RecipeIngredient {
    uses(&Ingredient::new(id, name).with_category(category), amount, unit)
}

fn step(id: &str, order: u16, description: &str, image: Option<&str>, timer: Option<u32>) -> RecipeStep {
    RecipeStep {
        id: id.to_owned(),
        order,
        description: description.to_owned(),
        image_url: image.map(|i| photo(i, 600)),
        timer,
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_owned()).collect()
}

/// The ingredients a user can pick on the ingredient input view.
pub fn ingredients() -> Vec<Ingredient> {
    vec![
        ingredient("ing-1", "雞胸肉", "肉類", "1604503468506-a8da13d82791"),
        ingredient("ing-2", "洋蔥", "蔬菜", "1580201092675-a0a6a6cafbb1"),
        ingredient("ing-3", "紅椒", "蔬菜", "1583119021934-cc712b0abb33"),
        ingredient("ing-4", "雞蛋", "蛋/奶類", "1598965402089-897c69f5bf59"),
        ingredient("ing-5", "米飯", "主食", "1536304993881-ff6e9eefa2a6"),
        ingredient("ing-6", "蒜頭", "調味料", "1615477550927-6ec8445a2159"),
        ingredient("ing-7", "醬油", "調味料", "1613920248829-55ab03596db4"),
        ingredient("ing-8", "番茄", "蔬菜", "1582284540020-8acbe03f4924"),
    ]
}

pub fn recipes() -> Vec<Recipe> {
    let pantry = ingredients();
    let [chicken, onion, red_pepper, egg, rice, garlic, soy_sauce, tomato] = [
        &pantry[0], &pantry[1], &pantry[2], &pantry[3], &pantry[4], &pantry[5], &pantry[6],
        &pantry[7],
    ];

    vec![
        Recipe {
            id: "recipe-1".to_owned(),
            title: "簡易照燒雞肉蓋飯".to_owned(),
            description: Some(
                "簡單快速的日式照燒雞肉飯，在家也能輕鬆做出餐廳等級的美味！".to_owned(),
            ),
            ingredients: vec![
                uses(chicken, 200.0, "克"),
                uses(onion, 0.5, "顆"),
                uses(garlic, 2.0, "瓣"),
                uses(soy_sauce, 2.0, "湯匙"),
                extra("ing-9", "味醂", "調味料", 1.0, "湯匙"),
                extra("ing-10", "糖", "調味料", 1.0, "茶匙"),
                uses(rice, 1.0, "碗"),
            ],
            steps: vec![
                step("step-1-1", 1, "將雞胸肉切成小塊，洋蔥切絲，蒜頭切末", Some("1605100804763-247f67b3557e"), None),
                step("step-1-2", 2, "熱鍋加入一點油，放入蒜末爆香", Some("1625937329935-287441889bce"), None),
                step("step-1-3", 3, "加入雞肉翻炒至表面變白", Some("1588165171080-c89acfa5a58d"), None),
                step("step-1-4", 4, "加入洋蔥絲繼續翻炒至軟化", None, Some(120)),
                step("step-1-5", 5, "加入醬油、味醂和糖，轉小火煮至醬汁濃稠", None, Some(180)),
                step("step-1-6", 6, "將雞肉淋在米飯上，撒上蔥花即可享用", Some("1546069901-d5bfd2cbfb1f"), None),
            ],
            tags: tags(&["日式", "雞肉", "蓋飯", "晚餐", "簡易"]),
            author: TEAM.to_owned(),
            image_url: photo("1567606647959-5516d48a8375", 800),
            prep_time: 10,
            cook_time: 15,
            servings: 2,
            difficulty: Difficulty::Simple,
            is_favorite: true,
            community_stats: CommunityStats {
                likes: 342,
                comments: 48,
                shares: 56,
            },
        },
        Recipe {
            id: "recipe-2".to_owned(),
            title: "番茄炒蛋".to_owned(),
            description: Some(
                "經典家常料理，酸甜可口的番茄搭配鮮嫩的炒蛋，簡單又美味。".to_owned(),
            ),
            ingredients: vec![
                uses(egg, 3.0, "顆"),
                uses(tomato, 2.0, "顆"),
                extra("ing-11", "蔥", "蔬菜", 1.0, "根"),
                extra("ing-12", "鹽", "調味料", 0.25, "茶匙"),
                extra("ing-13", "糖", "調味料", 0.5, "茶匙"),
            ],
            steps: vec![
                step("step-2-1", 1, "雞蛋打散加入少許鹽拌勻", Some("1523473827533-2a64d0d36748"), None),
                step("step-2-2", 2, "番茄切塊，蔥切段", Some("1592924357228-91a4daadcfea"), None),
                step("step-2-3", 3, "熱鍋倒油，倒入蛋液炒至半熟盛出", None, Some(60)),
                step("step-2-4", 4, "原鍋加少許油，爆香蔥段", Some("1579366948929-444eb79881eb"), None),
                step("step-2-5", 5, "加入番茄塊翻炒至軟化出汁", None, Some(120)),
                step("step-2-6", 6, "加入少許鹽和糖調味", Some("1582284540020-8acbe03f4924"), None),
                step("step-2-7", 7, "倒入炒好的蛋翻炒均勻即可出鍋", Some("1621237023000-6a628c285938"), None),
            ],
            tags: tags(&["中式", "家常菜", "快手菜", "素食", "早餐"]),
            author: TEAM.to_owned(),
            image_url: photo("1635516636894-a689632df17d", 800),
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            difficulty: Difficulty::Simple,
            is_favorite: false,
            community_stats: CommunityStats {
                likes: 289,
                comments: 32,
                shares: 41,
            },
        },
        Recipe {
            id: "recipe-3".to_owned(),
            title: "彩椒雞肉炒飯".to_owned(),
            description: Some(
                "色彩繽紛的炒飯，加入彩椒和雞肉增添風味和營養，是一道完整的主食。".to_owned(),
            ),
            ingredients: vec![
                uses(rice, 2.0, "碗"),
                uses(chicken, 100.0, "克"),
                uses(red_pepper, 0.5, "顆"),
                extra("ing-14", "黃椒", "蔬菜", 0.5, "顆"),
                uses(egg, 2.0, "顆"),
                uses(onion, 0.25, "顆"),
                uses(soy_sauce, 1.0, "湯匙"),
            ],
            steps: vec![
                step("step-3-1", 1, "將雞胸肉切小丁，彩椒和洋蔥切小塊", Some("1600626333540-9d501648685f"), None),
                step("step-3-2", 2, "熱鍋倒油，打入雞蛋炒散", Some("1564914138610-905a0291c097"), None),
                step("step-3-3", 3, "加入雞肉丁翻炒至變色", None, Some(90)),
                step("step-3-4", 4, "加入彩椒和洋蔥繼續翻炒", Some("1551464664-222eeb2d2034"), None),
                step("step-3-5", 5, "倒入隔夜冷飯，用鏟子拍散", Some("1603133872878-684f208fb84b"), None),
                step("step-3-6", 6, "最後加入醬油調味，大火翻炒均勻即可", Some("1617016698293-eb51de04a4ca"), None),
            ],
            tags: tags(&["炒飯", "雞肉", "家常菜", "午餐", "快手菜"]),
            author: TEAM.to_owned(),
            image_url: photo("1512058564366-18510be2db19", 800),
            prep_time: 10,
            cook_time: 15,
            servings: 2,
            difficulty: Difficulty::Simple,
            is_favorite: false,
            community_stats: CommunityStats {
                likes: 217,
                comments: 26,
                shares: 18,
            },
        },
    ]
}

fn comment(id: &str, recipe_id: &str, user: (&str, &str), content: &str, created_at: &str, likes: u32) -> Comment {
    let (user_id, user_name) = user;
    let avatar = user_id.trim_start_matches('u');

    Comment {
        id: id.to_owned(),
        recipe_id: recipe_id.to_owned(),
        user_id: user_id.to_owned(),
        user_name: user_name.to_owned(),
        user_avatar_url: Some(format!("https://i.pravatar.cc/150?u={avatar}")),
        content: content.to_owned(),
        created_at: created_at.to_owned(),
        likes,
    }
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment("c1", "recipe-1", ("u1", "美食家"), "我加了一點糖，味道更好了！推薦大家試試。", "2023-11-12T15:32:00Z", 5),
        comment("c2", "recipe-1", ("u2", "小新手"), "第一次做就成功了，步驟很清晰，謝謝分享！", "2023-11-13T09:15:00Z", 3),
        comment("c3", "recipe-2", ("u3", "健身達人"), "每天午餐必備，搭配糙米更健康。", "2023-11-10T12:43:00Z", 7),
    ]
}

#[allow(clippy::too_many_arguments)]
fn tip(
    id: &str,
    title: &str,
    content: &str,
    category: &str,
    image: &str,
    author: &str,
    date_added: &str,
    is_favorite: bool,
    likes: u32,
) -> CookingTip {
    CookingTip {
        id: id.to_owned(),
        title: title.to_owned(),
        content: content.to_owned(),
        category: category.to_owned(),
        image_url: Some(photo(image, 800)),
        author: author.to_owned(),
        date_added: date_added.to_owned(),
        is_favorite,
        likes,
    }
}

pub fn cooking_tips() -> Vec<CookingTip> {
    vec![
        tip("tip-1", "蒜頭快速去皮技巧", "將蒜頭放入一個密封的容器中用力搖晃約30秒，蒜皮就會輕鬆脫落，省去一個個剝皮的麻煩。", "食材處理", "1540148426945-6cf22a6b2383", "料理達人", "2023-11-05", false, 158),
        tip("tip-2", "不溢出的煮麵方法", "在煮麵的水中加入一小匙食用油，可以防止水溢出，同時避免麵條黏在一起。", "烹飪方法", "1612874742237-6526221588e3", "家常美食", "2023-11-10", true, 236),
        tip("tip-3", "肉類醃製黃金時間", "肉類醃製時間不宜過長，雞肉約30分鐘至2小時，牛肉和豬肉約2至4小時為佳，避免肉質變柴。", "調味技巧", "1615937722923-67f6deaf2cc9", "肉食控", "2023-11-08", false, 197),
        tip("tip-4", "蔬菜保鮮小秘訣", "將蔬菜用廚房紙巾包裹後再放入保鮮袋中，可以吸收多餘水分並保持蔬菜新鮮。", "保存方法", "1566385101042-1a0aa0c1268c", "健康飲食家", "2023-11-15", false, 172),
        tip("tip-5", "烘焙準備的時間管理", "烘焙前一天晚上準備好所有食材和工具，並閱讀完整食譜，能讓烘焙過程更加順暢並減少出錯。", "時間管理", "1486427944299-d1955d23e34d", "甜點師", "2023-11-03", true, 215),
        tip("tip-6", "快速軟化奶油的方法", "需要軟化奶油時，將奶油切成小塊並放在室溫下約15分鐘，比整塊放置更快軟化。", "食材處理", "1569288063643-5d9869a81c82", "烘焙王", "2023-11-12", false, 143),
    ]
}
