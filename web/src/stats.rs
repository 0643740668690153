use burrow_core::RoundStats;
use yew::prelude::*;

use crate::utils::Modal;

#[derive(Properties, PartialEq)]
pub(crate) struct StatsProps {
    #[prop_or_default]
    pub open: bool,
    pub stats: RoundStats,
    pub onclose: Callback<MouseEvent>,
}

#[function_component]
pub(crate) fn StatsView(props: &StatsProps) -> Html {
    let RoundStats { hits, misses } = props.stats;

    html! {
        <Modal>
            <dialog id="statsModal" open={props.open}>
                <article>
                    <h2>{"Round stats"}</h2>
                    <ul>
                        <li>{"Hits: "}<span id="totalHits">{hits}</span></li>
                        <li>{"Misses: "}<span id="totalMisses">{misses}</span></li>
                        <li>{"Accuracy: "}<span id="accuracy">{props.stats.accuracy()}</span>{"%"}</li>
                    </ul>
                    <footer>
                        <button onclick={props.onclose.clone()}>{"Close"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
