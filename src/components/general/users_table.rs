use crate::model::*;
use leptos::{ev::MouseEvent, logging::*, prelude::*};

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub id: ColumnId,
    pub header: &'static str,
}

/// Every column is sortable; cell text comes from [`column_value`].
pub static COLUMNS: [Column; 3] = [
    Column {
        id: ColumnId::Name,
        header: "Name",
    },
    Column {
        id: ColumnId::Email,
        header: "Email",
    },
    Column {
        id: ColumnId::Company,
        header: "Company",
    },
];

/// Sortable users table. Owns the sort state for as long as it is mounted.
#[component]
pub fn UsersTable(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    let (sort, set_sort) = signal(SortState::default());
    let on_sort = Callback::new(move |(column, multi): (ColumnId, bool)| {
        set_sort.update(|sort| sort.toggle(column, multi));
        log!("sorting users by {:?}", sort.get_untracked().entries());
    });

    view! { <UsersTableView users sort on_sort /> }
}

#[component]
pub fn UsersTableView(
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<(ColumnId, bool)>,
) -> impl IntoView {
    let rows = move || {
        let rows = sort.with(|sort| users.with(|users| sort_users(users, sort)));
        rows.into_iter()
            .map(|user| {
                view! {
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|column| {
                                view! { <td>{column_value(&user, column.id).to_string()}</td> }
                            })
                            .collect_view()}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <table role="table" aria-label="users">
            <thead>
                <tr>
                    {COLUMNS
                        .iter()
                        .map(|column| {
                            let id = column.id;
                            let direction = move || sort.with(|sort| sort.direction_of(id));
                            view! {
                                <th
                                    data-column=id.as_str()
                                    aria-sort=move || SortDirection::aria(direction())
                                >
                                    <button on:click=move |ev: MouseEvent| {
                                        on_sort.run((id, ev.shift_key()));
                                    }>
                                        {column.header}
                                        {move || SortDirection::glyph(direction())}
                                    </button>
                                </th>
                            }
                        })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
