//! Interactive view over the session state.
//!
//! `App` wires the stateless client, the ureq transport and the session
//! together: every network operation follows the confirm-then-apply rule,
//! so a failed round-trip leaves the session untouched and is reported
//! through the log only — the visible list simply does not change, and an
//! active edit stays open. `run` puts a line-oriented menu on top.

use std::io::{self, BufRead, Write};

use log::error;
use post_core::{CreatePost, EditMode, PostClient, PostId, Session, UpdatePost};
use ureq::Agent;

use crate::transport;

/// The running client application: transport, client and view state.
pub struct App {
    agent: Agent,
    client: PostClient,
    session: Session,
}

impl App {
    pub fn new(client: PostClient) -> Self {
        Self {
            agent: transport::agent(),
            client,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Fetch the list and replace the local copy. On failure the current
    /// list stays as-is.
    pub fn refresh(&mut self) {
        let req = self.client.build_list_posts();
        let result = transport::execute(&self.agent, req)
            .and_then(|resp| self.client.parse_list_posts(resp));
        match result {
            Ok(posts) => self.session.replace_posts(posts),
            Err(e) => error!("Error fetching posts: {e}"),
        }
    }

    /// Submit the compose fields. On success the fields are cleared and
    /// the list refetched so the server-assigned id is authoritative; on
    /// failure the fields stay populated for another attempt.
    pub fn submit_compose(&mut self) {
        let compose = self.session.compose();
        let input = CreatePost {
            title: compose.title.clone(),
            content: compose.content.clone(),
        };
        let result = self
            .client
            .build_create_post(&input)
            .and_then(|req| transport::execute(&self.agent, req))
            .and_then(|resp| self.client.parse_create_post(resp));
        match result {
            Ok(_) => {
                self.session.confirm_create();
                self.refresh();
            }
            Err(e) => error!("Error creating post: {e}"),
        }
    }

    /// Submit the active edit. On success the post is patched in place
    /// from the draft (no refetch) and edit mode ends; on failure the
    /// edit stays active with the draft intact.
    pub fn save_edit(&mut self) {
        let EditMode::Editing { id, draft } = self.session.edit().clone() else {
            return;
        };
        let input = UpdatePost {
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        let result = self
            .client
            .build_update_post(id, &input)
            .and_then(|req| transport::execute(&self.agent, req))
            .and_then(|resp| self.client.parse_update_post(resp));
        match result {
            Ok(()) => self.session.confirm_update(id, &draft),
            Err(e) => error!("Error updating post: {e}"),
        }
    }

    /// Delete a post; the local copy is removed only after the server
    /// confirms.
    pub fn delete(&mut self, id: PostId) {
        let req = self.client.build_delete_post(id);
        let result = transport::execute(&self.agent, req)
            .and_then(|resp| self.client.parse_delete_post(resp));
        match result {
            Ok(()) => self.session.confirm_delete(id),
            Err(e) => error!("Error deleting post: {e}"),
        }
    }
}

const HELP: &str = "\
commands:
  show            print the current post list
  list            refetch the list from the server
  new             compose a new post
  edit <id>       edit a post in place
  save            submit the active edit
  cancel          discard the active edit
  delete <id>     delete a post
  quit";

/// Run the interactive loop until the user quits or stdin closes.
pub fn run(client: PostClient) -> anyhow::Result<()> {
    let mut app = App::new(client);
    app.refresh();
    render(&app);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("show") => render(&app),
            Some("list") => {
                app.refresh();
                render(&app);
            }
            Some("new") => {
                compose(&mut app, &mut lines)?;
                render(&app);
            }
            Some("edit") => match words.next().and_then(|w| w.parse::<PostId>().ok()) {
                Some(id) => {
                    if app.session_mut().start_edit(id) {
                        edit_draft(&mut app, &mut lines)?;
                        println!("editing post {id}; `save` to submit, `cancel` to discard");
                    } else {
                        println!("no post with id {id}");
                    }
                }
                None => println!("usage: edit <id>"),
            },
            Some("save") => {
                if app.session().editing_id().is_none() {
                    println!("no active edit");
                } else {
                    app.save_edit();
                    render(&app);
                }
            }
            Some("cancel") => {
                app.session_mut().cancel_edit();
            }
            Some("delete") => match words.next().and_then(|w| w.parse::<PostId>().ok()) {
                Some(id) => {
                    app.delete(id);
                    render(&app);
                }
                None => println!("usage: delete <id>"),
            },
            Some("quit") | Some("exit") => return Ok(()),
            Some(_) => println!("{HELP}"),
        }
    }
}

fn render(app: &App) {
    let posts = app.session().posts();
    if posts.is_empty() {
        println!("(no posts)");
        return;
    }
    for post in posts {
        let marker = if app.session().editing_id() == Some(post.id) {
            " [editing]"
        } else {
            ""
        };
        println!("#{} {}{}", post.id, post.title, marker);
        println!("    {}", post.content);
    }
}

/// Prompt for the new-post fields. Both are required; empty input keeps
/// asking, mirroring the required-field check of the compose form.
fn compose<B: BufRead>(app: &mut App, lines: &mut io::Lines<B>) -> anyhow::Result<()> {
    let Some(title) = prompt_required("title", lines)? else {
        return Ok(());
    };
    let Some(content) = prompt_required("content", lines)? else {
        return Ok(());
    };
    app.session_mut().compose_mut().title = title;
    app.session_mut().compose_mut().content = content;
    app.submit_compose();
    Ok(())
}

/// Prompt for replacement values of the active draft; blank input keeps
/// the current value, so fields never become empty.
fn edit_draft<B: BufRead>(app: &mut App, lines: &mut io::Lines<B>) -> anyhow::Result<()> {
    let Some(draft) = app.session_mut().editing_draft_mut() else {
        return Ok(());
    };
    if let Some(title) = prompt_optional(&format!("title [{}]", draft.title), lines)? {
        draft.title = title;
    }
    if let Some(content) = prompt_optional(&format!("content [{}]", draft.content), lines)? {
        draft.content = content;
    }
    Ok(())
}

/// Read one non-empty line; re-prompts on empty input, returns None when
/// stdin closes.
fn prompt_required<B: BufRead>(
    label: &str,
    lines: &mut io::Lines<B>,
) -> anyhow::Result<Option<String>> {
    loop {
        print!("{label}: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let value = line?.trim().to_string();
        if !value.is_empty() {
            return Ok(Some(value));
        }
        println!("{label} is required");
    }
}

/// Read one line; empty input means "keep the current value" (None when
/// empty or when stdin closes).
fn prompt_optional<B: BufRead>(
    label: &str,
    lines: &mut io::Lines<B>,
) -> anyhow::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let value = line?.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}
