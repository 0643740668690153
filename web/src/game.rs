use burrow_core::*;
use clap::Args;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::host::BrowserHost;
use crate::screen::{FeedbackId, FeedbackKind};
use crate::stats::StatsView;
use crate::utils::js_random_seed;

const MOLE_IMAGE: &str = "./images/monty-mole.png";
const HAZARD_IMAGE: &str = "./images/piranha-plant.png";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Restart,
    SelectDifficulty(Difficulty),
    SelectTile(TileIndex),
    Timer(Timer),
    ExpireFeedback(FeedbackId),
    ToggleSound,
    ShowStats,
    CloseStats,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: TileIndex,
    occupant: Occupant,
    #[prop_or_default]
    feedback: Vec<FeedbackKind>,
    callback: Callback<TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        occupant,
        feedback,
        callback,
    } = props.clone();

    let shaking = feedback.contains(&FeedbackKind::Shake);
    let class = classes!("tile", shaking.then_some("shake"));

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("tile {} click", index);
            callback.emit(index);
        })
    };

    let ontouchstart = {
        let callback = callback.clone();
        Callback::from(move |_: TouchEvent| {
            log::trace!("tile {} touch", index);
            callback.emit(index);
        })
    };

    html! {
        <div id={index.to_string()} {class} {onclick} {ontouchstart}>
            {
                match occupant {
                    Occupant::Empty => html! {},
                    Occupant::Mole => html! { <img src={MOLE_IMAGE} alt="mole"/> },
                    Occupant::Hazard => html! { <img src={HAZARD_IMAGE} alt="piranha plant"/> },
                }
            }
            {
                for feedback.iter().map(|kind| match kind {
                    FeedbackKind::Points(points) => html! {
                        <div class="popup">{format!("+{}", points)}</div>
                    },
                    FeedbackKind::Flash => html! { <div class="redFlash"/> },
                    FeedbackKind::Shake => html! {},
                })
            }
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, Default, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Preselect a difficulty (easy, medium or hard)
    #[arg(short, long)]
    #[prop_or_default]
    pub difficulty: Option<Difficulty>,

    /// Start with sound turned off
    #[arg(short, long)]
    #[prop_or_default]
    pub mute: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: GameController<BrowserHost>,
    difficulty: Difficulty,
}

impl GameView {
    fn is_started(&self) -> bool {
        !matches!(self.controller.session().state(), RoundState::Idle)
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.is_started() || self.difficulty == difficulty {
            return false;
        }
        self.difficulty = difficulty;
        self.controller
            .host_mut()
            .show_time_left(difficulty.profile().round_duration);
        true
    }

    fn restart(&mut self) {
        log::debug!("restart");
        self.controller.restart();
        if let Err(err) = gloo::utils::window().location().reload() {
            log::error!("could not reload page: {:?}", err);
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let host = BrowserHost::new(ctx.link().clone());
        let mut controller = GameController::new(host, RandomSpawner::new(seed));
        if props.mute {
            controller.toggle_sound();
        }

        let difficulty = props.difficulty.unwrap_or_default();
        controller
            .host_mut()
            .show_time_left(difficulty.profile().round_duration);

        Self {
            controller,
            difficulty,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let before = self.controller.host().screen().clone();

        match msg {
            Start => {
                log::debug!("start on {}", self.difficulty);
                if let Err(err) = self.controller.start(self.difficulty) {
                    log::warn!("could not start round: {}", err);
                }
                return true;
            }
            Restart => self.restart(),
            SelectDifficulty(difficulty) => return self.select_difficulty(difficulty),
            SelectTile(tile) => match self.controller.select_tile(tile) {
                Ok(outcome) => log::trace!("tile {}: {:?}", tile, outcome),
                Err(err) => log::warn!("tile {}: {}", tile, err),
            },
            Timer(timer) => self.controller.on_timer(timer),
            ExpireFeedback(id) => {
                self.controller.host_mut().screen_mut().expire(id);
            }
            ToggleSound => {
                let enabled = self.controller.toggle_sound();
                log::debug!("sound enabled: {}", enabled);
            }
            ShowStats => self.controller.show_stats(),
            CloseStats => self.controller.close_stats(),
        }

        *self.controller.host().screen() != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let screen = self.controller.host().screen();
        let started = self.is_started();

        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let cb_sound = ctx.link().callback(|_: MouseEvent| ToggleSound);
        let cb_show_stats = ctx.link().callback(|_: MouseEvent| ShowStats);
        let cb_close_stats = ctx.link().callback(|_: MouseEvent| CloseStats);
        let cb_difficulty = ctx.link().batch_callback(|e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match value.parse() {
                Ok(difficulty) => Some(SelectDifficulty(difficulty)),
                Err(err) => {
                    log::warn!("difficulty {:?}: {}", value, err);
                    None
                }
            }
        });
        let cb_tile = ctx.link().callback(SelectTile);

        html! {
            <div class="burrow">
                <small onclick={cb_show_stats}>{"···"}</small>
                <nav>
                    <select id="difficulty" onchange={cb_difficulty} disabled={started}>
                        {
                            for Difficulty::ALL.iter().map(|&difficulty| html! {
                                <option value={difficulty.name()} selected={difficulty == self.difficulty}>
                                    {difficulty.label()}
                                </option>
                            })
                        }
                    </select>
                    if started {
                        <button id="restartBtn" onclick={cb_restart}>{"Restart"}</button>
                    } else {
                        <button id="startBtn" onclick={cb_start}>{"Start"}</button>
                    }
                    <button id="soundBtn" onclick={cb_sound}>{screen.sound_label()}</button>
                </nav>
                <header>
                    <aside>{"Score: "}<span id="score">{screen.score}</span></aside>
                    <aside>{"Time: "}<span id="time">{screen.time_left}</span></aside>
                    <aside>{"High Score: "}<span id="highScore">{screen.high_score}</span></aside>
                </header>
                <div id="board" class={classes!("board", screen.board_enabled.then_some("playable"))}>
                    {
                        for (0..TILE_COUNT).map(|index| {
                            let occupant = screen.occupant_at(index);
                            let feedback = screen.feedback_on(index);
                            let callback = cb_tile.clone();
                            html! {
                                <TileView {index} {occupant} {feedback} {callback}/>
                            }
                        })
                    }
                </div>
                <StatsView open={screen.stats_open} stats={screen.stats} onclose={cb_close_stats}/>
            </div>
        }
    }
}
