use crate::api::{DEFAULT_API_URL, HttpQuizSource};
use crate::utils::*;
use clap::Args;
use gloo::timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::rc::Rc;
use trivia::BoardEvents;
use trivia_core as trivia;
use yew::html::Scope;
use yew::prelude::*;

#[derive(Debug)]
pub(crate) enum Msg {
    CellClick(trivia::CellCoord),
    StartClick,
    RoundLoaded(trivia::Result<trivia::Board>),
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    coords: trivia::CellCoord,
    text: AttrValue,
    #[prop_or_default]
    hidden: bool,
    callback: Callback<trivia::CellCoord>,
}

#[function_component(ClueCell)]
fn clue_cell_component(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        coords,
        text,
        hidden,
        callback,
    } = props.clone();

    let class = classes!("clue", hidden.then_some("hidden"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", coords);
        callback.emit(coords);
    });

    html! {
        <td id={coords.to_string()} {class} {onclick}>{text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the quiz service
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

pub(crate) struct GameView {
    controller: trivia::GameController,
    source: Rc<HttpQuizSource>,
    rng: SmallRng,
    link: Scope<Self>,
}

impl GameView {
    fn round_rng(&mut self) -> SmallRng {
        SmallRng::seed_from_u64(self.rng.next_u64())
    }
}

impl BoardEvents for GameView {
    fn on_cell_click(&mut self, coords: trivia::CellCoord) -> bool {
        match self.controller.reveal(coords) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("Ignoring click at {}: {}", coords, err);
                false
            }
        }
    }

    fn on_start_click(&mut self) -> bool {
        if !self.controller.begin_round() {
            return false;
        }

        let source = Rc::clone(&self.source);
        let mut rng = self.round_rng();
        let delay_ms = trivia::ROUND_START_DELAY.as_millis() as u32;
        self.link.send_future(async move {
            TimeoutFuture::new(delay_ms).await;
            Msg::RoundLoaded(trivia::load_round(source.as_ref(), &mut rng).await)
        });
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, api_url } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}, quiz service: {}", seed, api_url);

        Self {
            controller: trivia::GameController::new(),
            source: Rc::new(HttpQuizSource::new(api_url)),
            rng: SmallRng::seed_from_u64(seed),
            link: ctx.link().clone(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClick(coords) => {
                log::debug!("cell click: {}", coords);
                self.on_cell_click(coords)
            }
            StartClick => {
                log::debug!("start click");
                self.on_start_click()
            }
            RoundLoaded(loaded) => self.controller.complete_round(loaded),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.controller.phase();
        let loading = phase.is_loading();
        let board = self.controller.view();

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartClick
        });
        let cb_cell = ctx.link().callback(Msg::CellClick);

        html! {
            <div class={classes!("trivia", loading.then_some("loading"))}>
                <h1>{"Jeopardy!"}</h1>
                <button id="start" onclick={cb_start} disabled={loading}>{phase.start_label()}</button>
                <div id="spin-container" hidden={!loading}>
                    <div class="spinner"/>
                </div>
                <table id="jeopardy">
                    <thead>
                        if !board.header.is_empty() {
                            <tr>
                                { for board.header.iter().map(|title| html! { <th>{title}</th> }) }
                            </tr>
                        }
                    </thead>
                    <tbody>
                        {
                            for board.rows.into_iter().map(|row| html! {
                                <tr>
                                    {
                                        for row.into_iter().map(|cell| {
                                            let callback = cb_cell.clone();
                                            let hidden = cell.showing == trivia::Showing::Hidden;
                                            html! {
                                                <ClueCell coords={cell.coords} text={cell.text} {hidden} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo::utils::{body, document};
    use wasm_bindgen_test::*;
    use yew::web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> Element {
        let root = document().create_element("div").unwrap();
        body().append_child(&root).unwrap();
        root
    }

    fn text_of(root: &Element, selector: &str) -> Option<String> {
        root.query_selector(selector)
            .unwrap()
            .and_then(|node| node.text_content())
    }

    #[wasm_bindgen_test]
    async fn idle_view_has_start_button_and_empty_table() {
        let root = mount_root();
        let props = GameProps {
            seed: Some(1),
            api_url: DEFAULT_API_URL.to_string(),
        };

        yew::Renderer::<GameView>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(10).await;

        assert_eq!(text_of(&root, "#start").as_deref(), Some("Start"));
        assert_eq!(text_of(&root, "#jeopardy thead tr"), None);
        assert_eq!(text_of(&root, "#jeopardy tbody td"), None);
        assert!(root.query_selector("#spin-container[hidden]").unwrap().is_some());
    }
}
