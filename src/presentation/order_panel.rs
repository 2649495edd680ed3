//! Simulated BTC/USD perpetual order form.

use leptos::*;
use std::str::FromStr;

use crate::domain::logging::LogComponent;
use crate::domain::trading::{MAX_LEVERAGE, MIN_LEVERAGE, OrderForm, OrderType, Side};
use crate::log_info;

#[component]
pub fn OrderPanel() -> impl IntoView {
    let form = create_rw_signal(OrderForm::default());
    let outcome = create_rw_signal(None::<Result<String, String>>);

    let is_market = move || form.with(|f| f.order_type() == OrderType::Market);
    let submit = move |side: Side| {
        let result = form.with_untracked(|f| f.submit(side));
        outcome.set(Some(match result {
            Ok(ticket) => {
                log_info!(LogComponent::Presentation("OrderPanel"), "simulated order: {}", ticket.summary());
                Ok(ticket.summary())
            }
            Err(e) => Err(e.to_string()),
        }));
    };

    view! {
        <section class="page">
            <div class="card order-panel form">
                <div class="leaderboard-row">
                    <h2>"BTC/USD"</h2>
                    <span class="nav-user">"Perpetual"</span>
                </div>

                <label for="orderType">"Order Type"</label>
                <select
                    id="orderType"
                    on:change=move |ev| {
                        if let Ok(order_type) = OrderType::from_str(&event_target_value(&ev)) {
                            form.update(|f| f.set_order_type(order_type));
                        }
                    }
                >
                    <option value="limit" selected=move || !is_market()>"Limit"</option>
                    <option value="market" selected=is_market>"Market"</option>
                </select>

                <label for="priceInput">"Price"</label>
                <input
                    type="number"
                    id="priceInput"
                    step="0.01"
                    placeholder="0.00"
                    disabled=is_market
                    prop:value=move || form.with(|f| f.price().to_string())
                    on:input=move |ev| form.update(|f| f.set_price(event_target_value(&ev)))
                />

                <label>"Leverage"</label>
                <div>{move || format!("{}x", form.with(|f| f.leverage()))}</div>
                <input
                    type="range"
                    id="leverageSlider"
                    min=MIN_LEVERAGE
                    max=MAX_LEVERAGE
                    prop:value=move || form.with(|f| f.leverage().to_string())
                    on:input=move |ev| {
                        if let Ok(leverage) = event_target_value(&ev).parse::<u8>() {
                            form.update(|f| f.set_leverage(leverage));
                        }
                    }
                />
                <div class="leverage-track">
                    <div
                        class="leverage-fill"
                        style:width=move || format!("{}%", form.with(|f| f.leverage_fill_percent()))
                    ></div>
                </div>

                <label for="amountInput">"Amount"</label>
                <input
                    type="number"
                    id="amountInput"
                    placeholder="0.00"
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                />

                <div class="side-buttons">
                    <button class="long-button" on:click=move |_| submit(Side::Long)>"Long"</button>
                    <button class="short-button" on:click=move |_| submit(Side::Short)>"Short"</button>
                </div>

                {move || match outcome.get() {
                    Some(Ok(summary)) => view! { <p class="confirmation">"Simulated: " {summary}</p> }.into_view(),
                    Some(Err(reason)) => view! { <p class="form-error">{reason}</p> }.into_view(),
                    None => ().into_view(),
                }}
            </div>
        </section>
    }
}
