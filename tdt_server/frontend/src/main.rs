use chrono::Local;
use tdt_core::duty_schedule::{self, YearBasis};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlSelectElement, Url, UrlSearchParams};
use yew::prelude::*;

static AVATAR_COLORS: [&str; 6] = [
    "#ef4444", "#3b82f6", "#22c55e", "#eab308", "#a855f7", "#ec4899",
];

/// Colored badge showing a room's slot number.
fn avatar(room: &str) -> Html {
    let slot = duty_schedule::room_slot(room);
    let color = AVATAR_COLORS[(slot - 1) % AVATAR_COLORS.len()];
    html! {
        <span class="avatar" style={format!("background:{color}")}>{slot}</span>
    }
}

#[function_component]
pub fn App() -> Html {
    let user_room_handle = use_state_eq(|| String::from(""));
    let user_room = (*user_room_handle).clone();
    let show_selector_handle = use_state_eq(|| false);
    let show_selector = *show_selector_handle;
    let dark_mode_handle = use_state_eq(|| false);
    let dark_mode = *dark_mode_handle;

    let now = Local::now().naive_local();
    let today = now.date();
    let week_number = duty_schedule::current_week_number(today);
    let assignment = duty_schedule::assignment_for_week(week_number);
    let schedule = duty_schedule::upcoming_schedule(
        today,
        duty_schedule::DEFAULT_HORIZON,
        YearBasis::Calendar,
    );
    let week_start = duty_schedule::date_for_weekday(
        duty_schedule::base_year(today, YearBasis::Calendar),
        week_number,
        1,
    );
    let progress = duty_schedule::week_progress(now, week_start);

    let calendar_url_handle = use_memo(
        |user_room: &String| {
            let url_search_params = UrlSearchParams::new().unwrap();
            url_search_params.set("room", user_room);
            let url = Url::new_with_base(
                "/calendar",
                &String::from(window().unwrap().location().to_string()),
            )
            .unwrap();
            url.set_search(&String::from(url_search_params.to_string()));
            String::from(url.to_string())
        },
        user_room.clone(),
    );
    let calendar_url = (*calendar_url_handle).clone();

    let on_change_room = {
        let user_room_handle = user_room_handle.clone();
        Callback::from(move |e: Event| {
            user_room_handle.set(
                e.target()
                    .unwrap()
                    .unchecked_into::<HtmlSelectElement>()
                    .value(),
            )
        })
    };
    let on_click_dark_mode = {
        let dark_mode_handle = dark_mode_handle.clone();
        Callback::from(move |_: MouseEvent| dark_mode_handle.set(!dark_mode))
    };
    let on_click_export = {
        let show_selector_handle = show_selector_handle.clone();
        Callback::from(move |_: MouseEvent| show_selector_handle.set(true))
    };
    let on_click_close = {
        let show_selector_handle = show_selector_handle.clone();
        Callback::from(move |_: MouseEvent| show_selector_handle.set(false))
    };
    let on_click_download = {
        let user_room = user_room.clone();
        let calendar_url = calendar_url.clone();
        let show_selector_handle = show_selector_handle.clone();
        Callback::from(move |_: MouseEvent| {
            let window = window().unwrap();
            if user_room.is_empty() {
                window
                    .alert_with_message("Select your room first.")
                    .unwrap();
                return;
            }
            window.location().set_href(&calendar_url).unwrap();
            show_selector_handle.set(false);
        })
    };

    html! {
        <main class={if dark_mode { "dark" } else { "" }}>
            <header>
                <h1>{"🗑️ Trash Timetable"}</h1>
                <button onclick={on_click_dark_mode}>
                    {if dark_mode { "☀" } else { "🌙" }}
                </button>
            </header>
            if show_selector {
                <dialog open=true>
                    <header>
                        <h3>{"Export to Calendar"}</h3>
                        <button onclick={on_click_close.clone()}>{"✕"}</button>
                    </header>
                    <p>{"Select Your Room:"}</p>
                    <select onchange={on_change_room}>
                        <option value="" selected={user_room.is_empty()}>{"Choose..."}</option>
                        { for duty_schedule::ROOMS.iter().map(|room| html! {
                            <option value={*room} selected={user_room == *room}>{*room}</option>
                        }) }
                    </select>
                    <div>
                        <button onclick={on_click_download}>{"Download .ics"}</button>
                        <button onclick={on_click_close}>{"Cancel"}</button>
                    </div>
                </dialog>
            }
            <section>
                <h2>{"⚠ Reminder"}</h2>
                <p>
                    {assignment.room}
                    {" please don't forget to empty out the kitchen refuse bin, and take out the "}
                    <strong>{assignment.bin}</strong>
                    {" by Sunday."}
                </p>
                <progress max="100" value={format!("{progress:.0}")}></progress>
                <p>{format!("{}% of the week passed", progress.round())}</p>
            </section>
            <section>
                <h2>{"📅 Upcoming Schedule"}</h2>
                <div class="schedule">
                    { for schedule.iter().map(|entry| html! {
                        <div class="entry" key={entry.week}>
                            {avatar(entry.room)}
                            <div>
                                <div class="room">{entry.room}</div>
                                <div class="dates">{entry.display_label.clone()}</div>
                            </div>
                            <div class="bin">
                                {"Bin: "}<strong>{entry.bin}</strong>
                                {if entry.bin.contains("Recycle") { " ♻" } else { " 🗑" }}
                            </div>
                        </div>
                    }) }
                </div>
            </section>
            <button onclick={on_click_export}>{"Export to Calendar"}</button>
        </main>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    yew::Renderer::<App>::new().render();
}
