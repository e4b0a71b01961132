use crate::models::{Player, PlayerDetail};

/// Shown on the roster page when the collection fetch comes back empty.
pub const EMPTY_ROSTER_NOTICE: &str = "No players on the roster yet.";
/// Shown instead of cards when the remote API cannot be reached.
pub const ROSTER_UNAVAILABLE_NOTICE: &str = "The roster is unavailable right now.";

/// Roster view: the creation form followed by one card per player. When
/// `notice` is set it replaces the card grid, which keeps failure states
/// whole pages rather than partially built ones.
pub fn render_roster_page(players: &[Player], notice: Option<&str>) -> String {
    let body = match notice {
        Some(notice) => empty_state(notice),
        None if players.is_empty() => empty_state(EMPTY_ROSTER_NOTICE),
        None => {
            let cards: String = players.iter().map(player_card).collect();
            format!("<div class=\"roster\">{cards}</div>")
        }
    };
    page("Puppy Bowl Roster", &format!("{NEW_PLAYER_FORM}{body}"))
}

/// Detail view: the player's fields plus the teammate list from the embedded
/// team, in the order the API returned it, and a close link back to the
/// roster. Going back re-fetches the whole collection; nothing is cached.
pub fn render_player_page(detail: &PlayerDetail) -> String {
    let player = &detail.player;
    let teammates = match &detail.team {
        Some(team) if !team.players.is_empty() => {
            let items: String = team
                .players
                .iter()
                .map(|teammate| format!("<li>{}</li>", escape(&teammate.name)))
                .collect();
            format!(
                "<h2>Teammates on {}</h2><ol class=\"teammates\">{items}</ol>",
                escape(&team.name)
            )
        }
        _ => "<p class=\"empty-state\">Not on a team yet.</p>".to_string(),
    };

    let content = format!(
        concat!(
            "<article class=\"player-detail\">",
            "<img src=\"{image}\" alt=\"Picture of {name}\" />",
            "<h1>{name}</h1>",
            "<p class=\"breed\">{breed}</p>",
            "<p class=\"status\">Status: {status}</p>",
            "{teammates}",
            "<a class=\"close\" href=\"/\">Back to roster</a>",
            "</article>",
        ),
        image = escape(&player.image_url),
        name = escape(&player.name),
        breed = escape(&player.breed),
        status = player.status,
        teammates = teammates,
    );
    page(&player.name, &content)
}

pub fn render_missing_player_page(id: i64) -> String {
    let content = format!(
        concat!(
            "<div class=\"empty-state\">",
            "<p>Player #{id} could not be loaded.</p>",
            "<a class=\"close\" href=\"/\">Back to roster</a>",
            "</div>",
        ),
        id = id,
    );
    page("Player not found", &content)
}

fn player_card(player: &Player) -> String {
    format!(
        concat!(
            "<div class=\"player-card\" data-player-id=\"{id}\">",
            "<img src=\"{image}\" alt=\"Picture of {name}\" />",
            "<h2>{name}</h2>",
            "<p class=\"breed\">{breed}</p>",
            "<a class=\"details\" href=\"/players/{id}\">See details</a>",
            "<form method=\"post\" action=\"/players/{id}/delete\">",
            "<button class=\"remove\" type=\"submit\">Remove from roster</button>",
            "</form>",
            "</div>",
        ),
        id = player.id,
        image = escape(&player.image_url),
        name = escape(&player.name),
        breed = escape(&player.breed),
    )
}

fn empty_state(notice: &str) -> String {
    format!("<p class=\"empty-state\">{}</p>", escape(notice))
}

fn page(title: &str, content: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{CONTENT}}", content)
}

/// Minimal entity escaping for everything interpolated into markup. Player
/// names and image URLs come from the network and from raw form input.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const NEW_PLAYER_FORM: &str = r#"<section class="form-panel">
  <h2>Add a player</h2>
  <form method="post" action="/players">
    <label>
      Name:
      <input type="text" name="name" />
    </label>
    <label>
      Breed:
      <input type="text" name="breed" />
    </label>
    <label>
      Status:
      <select name="status">
        <option value="bench">bench</option>
        <option value="field">field</option>
      </select>
    </label>
    <label>
      Where can we find a picture?
      <input type="text" name="imageUrl" />
    </label>
    <button type="submit">Add Player</button>
  </form>
</section>"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #cfe3f5;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
      display: grid;
      justify-items: center;
      gap: 24px;
    }

    .form-panel,
    .player-detail,
    .empty-state {
      width: min(680px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .form-panel form {
      display: grid;
      gap: 12px;
    }

    .form-panel label {
      display: grid;
      gap: 4px;
      font-size: 0.95rem;
    }

    input,
    select {
      padding: 8px 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 10px;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .roster {
      width: min(960px, 100%);
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 18px;
    }

    .player-card {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 16px;
      display: grid;
      gap: 8px;
      text-align: center;
    }

    .player-card img,
    .player-detail img {
      width: 100%;
      border-radius: 12px;
      object-fit: cover;
      aspect-ratio: 1 / 1;
      background: rgba(47, 72, 88, 0.08);
    }

    .player-card h2,
    .player-detail h1 {
      margin: 0;
    }

    .breed {
      margin: 0;
      color: #6b645d;
    }

    .status {
      margin: 0;
      color: var(--accent-2);
      font-weight: 600;
    }

    .details,
    .close {
      color: var(--accent-2);
      font-weight: 600;
      text-decoration: none;
    }

    .teammates {
      margin: 8px 0 16px;
      padding-left: 24px;
    }

    .player-card .remove {
      background: var(--accent-2);
    }

    .empty-state {
      text-align: center;
      color: #6b645d;
    }
  </style>
</head>
<body>
{{CONTENT}}
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Status, Team};

    fn player(id: i64, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            breed: "Corgi".to_string(),
            status: Status::Bench,
            image_url: format!("https://example.test/{id}.jpg"),
            team_id: None,
        }
    }

    #[test]
    fn renders_one_card_per_player() {
        let players = vec![player(1, "Rex"), player(2, "Maple"), player(3, "Biscuit")];
        let html = render_roster_page(&players, None);
        assert_eq!(html.matches("class=\"player-card\"").count(), players.len());
        assert!(html.contains("Rex"));
        assert!(html.contains("/players/2/delete"));
        assert!(html.contains("href=\"/players/3\""));
    }

    #[test]
    fn empty_roster_renders_defined_empty_state() {
        let html = render_roster_page(&[], None);
        assert!(!html.contains("player-card"));
        assert!(html.contains(EMPTY_ROSTER_NOTICE));
    }

    #[test]
    fn unavailable_notice_replaces_cards() {
        let players = vec![player(1, "Rex")];
        let html = render_roster_page(&players, Some(ROSTER_UNAVAILABLE_NOTICE));
        assert!(!html.contains("player-card"));
        assert!(html.contains(ROSTER_UNAVAILABLE_NOTICE));
    }

    #[test]
    fn roster_page_carries_the_creation_form() {
        let html = render_roster_page(&[], None);
        assert!(html.contains("action=\"/players\""));
        for field in ["name", "breed", "status", "imageUrl"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
    }

    #[test]
    fn hostile_player_names_are_escaped() {
        let mut rex = player(1, "<script>alert('woof')</script>");
        rex.breed = "\"Corgi\" & more".to_string();
        let html = render_roster_page(&[rex], None);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;Corgi&quot; &amp; more"));
    }

    #[test]
    fn detail_page_lists_teammates_in_team_order() {
        let detail = PlayerDetail {
            player: player(2, "Biscuit"),
            team: Some(Team {
                id: 3,
                name: "Ruff".to_string(),
                players: vec![player(2, "Biscuit"), player(5, "Maple"), player(9, "Ziggy")],
            }),
        };
        let html = render_player_page(&detail);
        let biscuit = html.find("<li>Biscuit</li>").unwrap();
        let maple = html.find("<li>Maple</li>").unwrap();
        let ziggy = html.find("<li>Ziggy</li>").unwrap();
        assert!(biscuit < maple && maple < ziggy);
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn detail_page_without_team_still_renders() {
        let detail = PlayerDetail {
            player: player(4, "Solo"),
            team: None,
        };
        let html = render_player_page(&detail);
        assert!(html.contains("Solo"));
        assert!(html.contains("Not on a team yet."));
    }

    #[test]
    fn missing_player_page_links_back_to_roster() {
        let html = render_missing_player_page(42);
        assert!(html.contains("Player #42"));
        assert!(html.contains("href=\"/\""));
    }
}
