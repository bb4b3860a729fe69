use crate::presentation::presenters;
use crate::presentation::renderer;
use crate::presentation::views::UserListView;
use anyhow::{Context, Result};
use drushctl_runtime::DrushRunner;
use drushctl_runtime::ops::user;

pub fn handle(
    runner: &dyn DrushRunner,
    user_arg: Option<String>,
    roles: bool,
    json: bool,
) -> Result<()> {
    if roles {
        let output = user::by_role(runner).context("Failed to get user information")?;
        println!("{}", output);
        return Ok(());
    }

    if let Some(name_or_id) = user_arg {
        let output = user::view(runner, &name_or_id).context("Failed to get user information")?;
        println!("{}", output);
        return Ok(());
    }

    let users = user::list(runner).context("Failed to get user information")?;
    let status_counts = user::status_counts(runner);
    let view_model = presenters::present_user_list(users, status_counts);

    // JSON and plain output render the same parsed records, so counts
    // and per-record fields always agree between the two forms.
    if json {
        return renderer::render_json(&view_model);
    }
    print!("{}", UserListView::new(&view_model));
    Ok(())
}
