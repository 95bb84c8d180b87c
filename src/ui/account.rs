//! Account panel.

use leptos::prelude::*;

use crate::model::AccountState;

/// Shows the account name and sign-in flag from fixed local state.
#[component]
pub fn Account() -> impl IntoView {
    let AccountState {
        account_name,
        signed_in,
    } = AccountState::default();

    view! {
        <div id="Account">
            <h3>{account_name}</h3>
            <p>{signed_in}</p>
        </div>
    }
}
