//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Corte de Vídeos"</h1>
            <p class="subtitle">
                "Envie um vídeo, escolha a duração de cada segmento e quantos segundos "
                "remover do fim de cada um. O vídeo cortado é baixado automaticamente."
            </p>
        </div>
    }
}
